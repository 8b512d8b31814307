use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Rank;
use crate::session::{MAX_SCORE, QuestionRecord};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.last_result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], result.score, result.rank);
    render_question_breakdown(frame, chunks[2], &result.questions, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_rank_color(rank: Rank) -> Color {
    match rank {
        Rank::APlus | Rank::A => Color::Green,
        Rank::B => Color::Cyan,
        Rank::C => Color::Yellow,
        Rank::D => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: u32, rank: Rank) {
    let rank_color = get_rank_color(rank);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score: {}/{}", score, MAX_SCORE),
            Style::default().fg(rank_color).bold(),
        )),
        Line::from(Span::styled(
            format!("Rank: {}", rank),
            Style::default().fg(rank_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    questions: &[QuestionRecord],
    scroll: usize,
) {
    let lines: Vec<Line> = questions
        .iter()
        .map(|record| {
            let (symbol, color) = if record.is_correct() {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", record.number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!(
                        "{} = {:<8}",
                        record.problem,
                        record.problem.correct_answer()
                    ),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(
                        "  {} pts  ({} attempt{})",
                        record.points,
                        record.attempts,
                        if record.attempts == 1 { "" } else { "s" }
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
