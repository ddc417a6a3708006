use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::display_ending;
use crate::app::App;
use crate::models::{Question, QuestionFormat};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_instruction(frame, chunks[1], question.format);
    render_prompt(frame, chunks[2], question);
    render_options(frame, chunks[3], question, app.selected_option());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_instruction(frame: &mut Frame, area: Rect, format: QuestionFormat) {
    let text = match format {
        QuestionFormat::EndingFromDescription => "Which ending fits this form?",
        QuestionFormat::DescriptionFromEnding => "Pick the matching description.",
        QuestionFormat::DescriptionFromWord => "Identify this form.",
    };
    frame.render_widget(Paragraph::new(text).fg(Color::DarkGray), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, question: &Question) {
    let widget = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');
        let text = if question.format.answers_are_endings() {
            display_ending(option)
        } else {
            option.clone()
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(text, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter select  ·  b back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
