use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{MAX_SCORE, QUESTIONS_PER_SESSION};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_problem(frame, chunks[2], app);
    render_entry(frame, chunks[3], app.input());
    render_feedback(frame, chunks[4], app);
    render_controls(frame, chunks[6]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let difficulty = session
        .difficulty()
        .map(|d| d.label())
        .unwrap_or_default();

    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left = Paragraph::new(format!(
        "{}  ·  attempt {}/2",
        difficulty,
        session.attempt()
    ))
    .fg(Color::DarkGray);
    let right = Paragraph::new(format!(
        "{}/{}  ·  score {}/{}",
        session.question_number(),
        QUESTIONS_PER_SESSION,
        session.score(),
        MAX_SCORE
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);

    frame.render_widget(left, columns[0]);
    frame.render_widget(right, columns[1]);
}

fn render_problem(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let text = match session.current_problem() {
        Ok(problem) => format!("Question {}: {} =", session.question_number(), problem),
        Err(_) => String::new(),
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_entry(frame: &mut Frame, area: Rect, input: &str) {
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(20),
        Constraint::Fill(1),
    ])
    .split(area);

    let line = Line::from(vec![
        Span::styled(input, Style::default().fg(Color::Yellow).bold()),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, columns[1]);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(feedback) = app.feedback() else {
        return;
    };

    let color = if feedback.is_positive() {
        Color::Green
    } else {
        Color::Red
    };

    let widget = Paragraph::new(feedback.message())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("type a number  ·  enter submit  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
