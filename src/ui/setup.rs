use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, SetupRow};
use crate::data::DataSource;
use crate::models::Case;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], app.data_source());
    render_rows(frame, chunks[1], app);
    render_notice(frame, chunks[2], app.notice());
    render_controls(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect, source: &DataSource) {
    let content = vec![
        Line::from(Span::styled(
            "LATIN DECLENSION QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!("endings from the {}", source),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_rows(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.setup();
    let mut lines: Vec<Line> = Vec::with_capacity(SetupRow::count() + 3);

    for (index, row) in SetupRow::all().enumerate() {
        match row {
            SetupRow::Declension(_) if index == 0 => lines.push(heading("Declensions")),
            SetupRow::Case(case) if case == Case::ALL[0] => {
                lines.push(Line::from(""));
                lines.push(heading("Cases"));
            }
            SetupRow::Length => {
                lines.push(Line::from(""));
                lines.push(heading("Quiz length"));
            }
            _ => {}
        }

        let is_cursor = index == form.cursor();
        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };

        let label = match row {
            SetupRow::Declension(declension) => {
                format!("{} {}", checkbox(form.is_selected(row)), declension)
            }
            SetupRow::Case(case) => format!("{} {}", checkbox(form.is_selected(row)), case),
            SetupRow::Length => format!("< {} questions >", form.length()),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(label, style),
        ]));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::White).bold()))
}

fn checkbox(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space toggle  ·  h/l length  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
