mod quiz;
mod result;
mod setup;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Setup => setup::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// How an ending is shown as an option: `-ae`, or `(no ending)` for `""`.
fn display_ending(ending: &str) -> String {
    if ending.is_empty() {
        "(no ending)".to_string()
    } else {
        format!("-{}", ending)
    }
}
