mod quiz;
mod result;
mod subjects;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};
use crate::session::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Subjects => subjects::render(frame, area, app),
        Screen::Session => match app.session() {
            Some(session) if session.phase() == Phase::Completed => {
                result::render(frame, area, session)
            }
            Some(session) => quiz::render(frame, area, session, app.highlight()),
            None => subjects::render(frame, area, app),
        },
    }
}

/// Map a manifest color tag to a terminal color.
fn tag_color(tag: &str) -> Color {
    match tag {
        "blue" => Color::Blue,
        "red" => Color::Red,
        "green" => Color::Green,
        "purple" => Color::Magenta,
        "orange" => Color::LightRed,
        "cyan" => Color::Cyan,
        _ => Color::Gray,
    }
}
