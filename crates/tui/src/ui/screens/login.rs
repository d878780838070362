use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::centered_rect, theme::Theme},
    view_model::Gate,
};

/// Password gate shown until the ledger is unlocked.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card_area = centered_rect(34, 5, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" unlock ledger ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1)])
        .margin(1)
        .split(inner);

    let unlocking = state.vm.gate() == Gate::Unlocking;
    let (display, style) = if unlocking {
        ("unlocking…".to_string(), Style::default().fg(theme.dim))
    } else {
        (
            format!("{}│", mask_password(&state.password)),
            Style::default().fg(theme.accent),
        )
    };
    frame.render_widget(Paragraph::new(Span::styled(display, style)), rows[0]);

    let hint_area = Rect {
        x: card_area.x,
        y: card_area.y + card_area.height,
        width: card_area.width,
        height: 1,
    }
    .intersection(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter unlock · Esc clear · Ctrl+C quit",
            Style::default().fg(theme.dim),
        ))
        .alignment(Alignment::Center),
        hint_area,
    );
}

fn mask_password(password: &str) -> String {
    "•".repeat(password.chars().count())
}
