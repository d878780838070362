use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use api_types::account::Account;

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Accounts", theme).focused(true);
    let accounts = state.vm.accounts();

    if accounts.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::raw("No accounts. Press "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" to add one."),
        ]))
        .alignment(Alignment::Center);
        card.render_with(frame, area, empty);
        return;
    }

    let items: Vec<ListItem> = accounts
        .iter()
        .map(|account| ListItem::new(account_line(account, theme)))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(card.block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn account_line<'a>(account: &'a Account, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            format!("{:<16}", account.account_name),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("{:<7}", account.pay_type.as_str()),
            Style::default().fg(theme.text_muted),
        ),
    ];
    if !account.repay_day.is_empty() {
        spans.push(Span::styled(
            format!(" repay {}", account.repay_day),
            Style::default().fg(theme.dim),
        ));
    }
    if !account.use_day_from.is_empty() || !account.use_day_to.is_empty() {
        spans.push(Span::styled(
            format!(" use {}~{}", account.use_day_from, account.use_day_to),
            Style::default().fg(theme.dim),
        ));
    }
    if !account.description.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            account.description.as_str(),
            Style::default().fg(theme.text_muted),
        ));
    }
    Line::from(spans)
}
