use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{ui::theme::Theme, view_model::Panel};

const PANELS: [(Panel, char); 4] = [
    (Panel::Home, 'h'),
    (Panel::Accounts, 'a'),
    (Panel::Categories, 'c'),
    (Panel::Records, 'r'),
];

pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Panel, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (panel, _)) in PANELS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let label = panel.label();
        if *panel == active {
            spans.push(Span::styled("[", Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.text_muted)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// `h/a/c/r nav`
pub fn tab_shortcuts(theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (_, key)) in PANELS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("/"));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
    }
    spans.push(Span::raw(" nav"));
    spans
}
