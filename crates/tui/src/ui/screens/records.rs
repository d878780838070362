use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use api_types::{Currency, account::Account, record::Record};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::Card,
            money::{format_number, styled_amount},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let response = state.vm.records();
    let card = Card::new("Records", theme).focused(true);

    if response.records.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::raw("No records in this range. Press "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" to add one."),
        ]))
        .alignment(Alignment::Center);
        card.render_with(frame, layout[0], empty);
    } else {
        let accounts = state.vm.accounts();
        let items: Vec<ListItem> = response
            .records
            .iter()
            .map(|record| ListItem::new(record_line(record, accounts, theme)))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected));

        let list = List::new(items)
            .block(card.block())
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("» ");
        frame.render_stateful_widget(list, layout[0], &mut list_state);
    }

    let (label, decimals) = totals_format(&response.records);
    let footer = Line::from(vec![
        Span::styled(format!(" {label} spent "), Style::default().fg(theme.dim)),
        Span::styled(
            format_number(response.total_spend(), decimals),
            Style::default().fg(theme.negative),
        ),
        Span::styled("  income ", Style::default().fg(theme.dim)),
        Span::styled(
            format_number(response.sum_income, decimals),
            Style::default().fg(theme.positive),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), layout[1]);
}

/// Label and precision of the range totals, which the server adds up
/// across currencies.
fn totals_format(records: &[Record]) -> (String, usize) {
    let mut currencies: Vec<Currency> = Vec::new();
    for record in records {
        if !currencies.contains(&record.currency) {
            currencies.push(record.currency);
        }
    }
    let decimals = if currencies.iter().all(|currency| currency.is_integral()) {
        0
    } else {
        2
    };
    match currencies.as_slice() {
        [single] => (single.code().to_string(), decimals),
        [] => ("total".to_string(), decimals),
        _ => ("mixed-currency".to_string(), decimals),
    }
}

/// `MM-DD`, or the raw text when the date does not parse.
fn short_date(record: &Record) -> String {
    record
        .occurred_on()
        .map(|date| date.format("%m-%d").to_string())
        .unwrap_or_else(|| record.date.clone())
}

fn account_name<'a>(record: &Record, accounts: &'a [Account]) -> &'a str {
    accounts
        .iter()
        .find(|account| account.id.as_deref() == Some(record.account_id.as_str()))
        .map(|account| account.account_name.as_str())
        .unwrap_or("?")
}

fn record_line<'a>(record: &'a Record, accounts: &'a [Account], theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            format!("{} {:<5} ", short_date(record), record.time),
            Style::default().fg(theme.dim),
        ),
        Span::styled(
            format!("{:<12.12} ", account_name(record, accounts)),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("{:<6} ", record.pay_type.as_str()),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(
            format!("{:<12.12} ", record.category),
            Style::default().fg(theme.text),
        ),
        styled_amount(record.amount, record.currency, record.transaction_type, theme),
    ];
    if !record.description.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            record.description.as_str(),
            Style::default().fg(theme.text_muted),
        ));
    }
    Line::from(spans)
}
