mod menu;
mod question;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area),
        Screen::Menu => menu::render(frame, area, app),
        Screen::Question => question::render(frame, area, app),
        Screen::Results => result::render(frame, area, app),
    }
}
