pub mod category;
pub mod colors;
pub mod detail;
pub mod footer;
pub mod header;
pub mod home;
pub mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, CurrentScreen};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header / side menu
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);

    match app.view.screen {
        CurrentScreen::Home => home::render_home(f, app, chunks[1]),
        CurrentScreen::Detail => detail::render_detail(f, app, chunks[1]),
        CurrentScreen::Category => category::render_category(f, app, chunks[1]),
    }

    footer::render_footer(f, app, chunks[2]);
}
