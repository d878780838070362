use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    chart::ChartDataset,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, render_bar_chart},
            money::format_number,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_totals(frame, layout[0], state, theme);

    match state.vm.chart().current() {
        Some(chart) => render_chart(frame, layout[1], chart, theme),
        None => {
            let card = Card::new("Spending by category", theme);
            let message = Paragraph::new(Span::styled(
                "No spending in this range.",
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center);
            card.render_with(frame, layout[1], message);
        }
    }
}

fn render_totals(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let records = state.vm.records();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    StatCard::new("Paid", format_number(records.sum_pay, 0), theme)
        .value_style(Style::default().fg(theme.negative))
        .render(frame, cols[0]);
    StatCard::new("Paid on credit", format_number(records.sum_credit_pay, 0), theme)
        .value_style(Style::default().fg(theme.negative))
        .render(frame, cols[1]);
    StatCard::new("Income", format_number(records.sum_income, 0), theme)
        .value_style(Style::default().fg(theme.positive))
        .render(frame, cols[2]);
}

fn render_chart(frame: &mut Frame<'_>, area: Rect, chart: &ChartDataset, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let data: Vec<(&str, u64)> = chart
        .slices
        .iter()
        .map(|slice| (slice.label.as_str(), slice.percent))
        .collect();
    render_bar_chart(frame, cols[0], "Spending by category (%)", &data, theme);

    let card = Card::new("Breakdown", theme);
    let inner = card.inner(cols[1]);
    let bar_width = (inner.width as usize).saturating_sub(24).clamp(4, 20);
    let mut lines: Vec<Line> = chart
        .slices
        .iter()
        .map(|slice| {
            Line::from(vec![
                Span::styled(format!("{:<10.10} ", slice.label), Style::default().fg(theme.text)),
                Span::styled(
                    ascii_bar(slice.percent, 100, bar_width),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(format!(" {:>3}%", slice.percent), Style::default().fg(theme.text)),
                Span::styled(
                    format!(" {}", format_number(slice.amount, 0)),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("Total {}", format_number(chart.total, 0)),
        Style::default().fg(theme.text_muted),
    )));
    card.render_with(frame, cols[1], Paragraph::new(lines));
}
