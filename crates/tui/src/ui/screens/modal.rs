use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{FieldKind, FormDraft},
    ui::{components::centered_rect, theme::Theme},
    view_model::ValidationError,
};

const LABEL_WIDTH: usize = 14;

/// Draws the open form over the current panel.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &dyn FormDraft,
    invalid: Option<&ValidationError>,
    focus: usize,
    theme: &Theme,
) {
    let fields = form.fields();
    let height = fields.len() as u16 + 5;
    let rect = centered_rect(56, height, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.title()),
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));

    let mut lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let focused = index == focus;
            let value = form.value(index);
            let shown = match field.kind {
                FieldKind::Secret => "•".repeat(value.chars().count()),
                FieldKind::Choice => format!("‹ {value} ›"),
                FieldKind::Text => value,
            };
            let cursor = if focused && field.kind != FieldKind::Choice {
                "│"
            } else {
                ""
            };
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            Line::from(vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label), label_style),
                Span::styled(format!("{shown}{cursor}"), Style::default().fg(theme.text)),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    match invalid {
        Some(err) => lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(theme.error),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Tab next · Space change · Enter save · Esc close",
            Style::default().fg(theme.dim),
        ))),
    }

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
