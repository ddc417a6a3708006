use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::display_ending;
use crate::app::App;
use crate::models::{AnswerRecord, QuizSummary};

const QUESTION_PREVIEW_LENGTH: usize = 45;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary();
    let grade_color = get_grade_color(summary.percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], summary, grade_color);
    render_question_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: QuizSummary, grade_color: Color) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                summary.correct, summary.total, summary.percentage
            ),
            Style::default().fg(grade_color).bold(),
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

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .answer_records()
        .iter()
        .zip(app.questions().iter())
        .flat_map(|(record, question)| {
            let show = |answer: &str| {
                if question.format.answers_are_endings() {
                    display_ending(answer)
                } else {
                    answer.to_string()
                }
            };
            breakdown_lines(record, show)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll(((app.result_scroll() * 2) as u16, 0));
    frame.render_widget(widget, area);
}

fn breakdown_lines(record: &AnswerRecord, show: impl Fn(&str) -> String) -> [Line<'static>; 2] {
    let (symbol, color) = if record.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    let mut detail = vec![Span::styled(
        "       ".to_string(),
        Style::default().fg(Color::DarkGray),
    )];
    if !record.is_correct {
        let given = record
            .selected_answer
            .as_deref()
            .map_or_else(|| "no answer".to_string(), &show);
        detail.push(Span::styled(
            format!("{}  ", given),
            Style::default().fg(Color::Red),
        ));
    }
    detail.push(Span::styled(
        show(&record.correct_answer),
        Style::default().fg(Color::Green),
    ));

    [
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", record.question_id),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_question(&record.question),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(detail),
    ]
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retake  ·  n new quiz  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
