use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let selected = app.selected_difficulty();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "DIFFICULTY LEVEL",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        let is_selected = *difficulty == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let range = difficulty.operand_range();

        content.push(Line::from(vec![
            Span::styled(
                format!("{} {}. {:<10}", marker, index + 1, difficulty.label()),
                style,
            ),
            Span::styled(
                format!("{}..{}", range.start(), range.end()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        content.push(Line::from(""));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k navigate  ·  1-3 or enter select  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}
