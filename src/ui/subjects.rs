use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_list(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZDECK",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("pick a subject".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.entries().len() * 2);

    for (index, entry) in app.entries().iter().enumerate() {
        let is_selected = index == app.cursor();
        let style = if is_selected {
            Style::default().fg(super::tag_color(&entry.color)).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", entry.icon), style),
            Span::styled(entry.name.as_str(), style),
            Span::styled(
                format!("  ·  {} questions", entry.total_questions),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // A failed subject load takes the spot of the description until a load
    // succeeds.
    if let Some(err) = app.load_error() {
        let widget = Paragraph::new(format!("{err}  ·  enter to retry"))
            .wrap(Wrap { trim: true })
            .fg(Color::Red);
        frame.render_widget(widget, area);
        return;
    }

    if let Some(description) = app
        .entries()
        .get(app.cursor())
        .and_then(|e| e.description.as_deref())
    {
        let widget = Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
