pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    app::{ActiveModal, AppState},
    view_model::{Gate, Panel},
};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = state.theme();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    if state.vm.gate() == Gate::Unlocked {
        render_shell(frame, area, state, &theme);
    } else {
        screens::login::render(frame, area, state, &theme);
    }

    if let Some((form, invalid)) = state.active_form() {
        screens::modal::render(frame, area, form, invalid, state.focus, &theme);
    }
    components::toast::render(frame, area, state.vm.toast(), &theme);
}

fn render_shell(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tabs
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, theme);
    components::tabs::render_tabs(frame, layout[1], state.vm.panel(), theme);

    match state.vm.panel() {
        Panel::Home | Panel::None => screens::home::render(frame, layout[2], state, theme),
        Panel::Accounts => screens::accounts::render(frame, layout[2], state, theme),
        Panel::Categories => screens::categories::render(frame, layout[2], state, theme),
        Panel::Records => screens::records::render(frame, layout[2], state, theme),
    }

    render_bottom_bar(frame, layout[3], state, theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let range = &state.vm.range;
    let mode = if state.prefs.lightmode { "light" } else { "dark" };

    let line = Line::from(vec![
        Span::styled("Range", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {} ~ {}  ", range.from, range.to)),
        Span::styled("Interval", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}d  ", state.prefs.summary_date_interval)),
        Span::styled("Mode", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {mode}  ")),
        Span::styled("Server", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", state.vm.backend().base_url())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let hints: &[(&str, &str)] = match (state.active_modal(), state.vm.panel()) {
        (Some(ActiveModal::Record), _) => &[
            ("Tab", "next"),
            ("Space", "change"),
            ("Enter", "save"),
            ("Esc", "close"),
        ],
        (Some(_), _) => &[("Tab", "next"), ("Enter", "save"), ("Esc", "close")],
        (None, Panel::Home | Panel::None) => &[
            ("n", "new record"),
            ("[ ]", "shift"),
            ("+/-", "interval"),
            ("d", "range"),
        ],
        (None, _) => &[
            ("n", "new"),
            ("e", "edit"),
            ("x", "delete"),
            ("[ ]", "shift"),
        ],
    };
    for (key, label) in hints {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled(*key, Style::default().fg(theme.accent)));
        parts.push(Span::raw(format!(" {label}")));
    }

    for (key, label) in [("p", "password"), ("m", "mode"), ("q", "quit")] {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled(key, Style::default().fg(theme.accent)));
        parts.push(Span::raw(format!(" {label}")));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
