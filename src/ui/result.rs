use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::{Session, Tier};

pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
    let percentage = session.percentage();
    let tier = session.tier();
    let color = tier_color(tier);
    let score = session.score();
    let total = session.total_questions();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(session.subject_name().to_string().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", percentage),
            Style::default().fg(color).bold(),
        )),
        Line::from(
            format!("{} correct  ·  {} incorrect", score, total - score).fg(Color::Gray),
        ),
        Line::from(""),
        Line::from(Span::styled(tier.message(), Style::default().fg(color))),
        Line::from(""),
        Line::from("r retry  ·  esc subjects  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::High => Color::Green,
        Tier::Medium => Color::Yellow,
        Tier::Low => Color::Red,
    }
}
