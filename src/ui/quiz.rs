use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::models::AnswerOption;
use crate::session::{Phase, Session};

const OPTION_LABELS: &[u8] = b"ABCDEFGH";

pub fn render(frame: &mut Frame, area: Rect, session: &Session, highlight: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_source_badge(frame, chunks[1], session);
    render_question_text(frame, chunks[2], &session.current_question().text);
    render_options(frame, chunks[3], session, highlight);
    render_feedback(frame, chunks[4], session);
    render_controls(frame, chunks[5], session.phase());
}

fn render_progress(frame: &mut Frame, area: Rect, session: &Session) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    let subject = Paragraph::new(session.subject_name().to_string()).fg(Color::DarkGray);
    frame.render_widget(subject, halves[0]);

    let progress = format!("{}/{}", session.question_number(), session.total_questions());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, halves[1]);
}

fn render_source_badge(frame: &mut Frame, area: Rect, session: &Session) {
    let question = session.current_question();
    let Some(label) = &question.source_subject else {
        return;
    };

    let color = question
        .source_color
        .as_deref()
        .map(super::tag_color)
        .unwrap_or(Color::Gray);
    let widget = Paragraph::new(format!("[{label}]")).fg(color);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &Session, highlight: usize) {
    let answered = session.phase() == Phase::Answered;
    let chosen = session.chosen();
    let mut lines: Vec<Line> = Vec::with_capacity(session.options().len() * 2);

    for (index, option) in session.options().iter().enumerate() {
        let (marker, style) = option_presentation(option, index, highlight, answered, chosen);
        let label = OPTION_LABELS
            .get(index)
            .map(|&c| c as char)
            .unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_presentation(
    option: &AnswerOption,
    index: usize,
    highlight: usize,
    answered: bool,
    chosen: Option<u32>,
) -> (&'static str, Style) {
    if !answered {
        return if index == highlight {
            (">", Style::default().fg(Color::Cyan).bold())
        } else {
            (" ", Style::default().fg(Color::Gray))
        };
    }

    let is_chosen = chosen == Some(option.id);
    if is_chosen && option.is_correct {
        ("+", Style::default().fg(Color::Green).bold())
    } else if is_chosen {
        ("x", Style::default().fg(Color::Red).bold())
    } else if option.is_correct {
        ("+", Style::default().fg(Color::Green))
    } else {
        (" ", Style::default().fg(Color::DarkGray))
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, session: &Session) {
    let (text, color) = match session.phase() {
        Phase::Active => ("options shuffled · s to reshuffle", Color::DarkGray),
        Phase::Answered => {
            let correct = session
                .options()
                .iter()
                .any(|o| Some(o.id) == session.chosen() && o.is_correct);
            if correct {
                ("correct", Color::Green)
            } else {
                ("wrong · the correct answer is marked", Color::Red)
            }
        }
        Phase::Completed => return,
    };

    let widget = Paragraph::new(text).fg(color);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, phase: Phase) {
    let text = match phase {
        Phase::Active => "j/k navigate  ·  enter answer  ·  s shuffle  ·  esc subjects  ·  q quit",
        _ => "enter next  ·  r restart  ·  esc subjects  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
