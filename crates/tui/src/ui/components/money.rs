use api_types::{Currency, record::TransactionType};
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Groups the integer part by thousands: `1234567.5` -> `1,234,567.50`.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Amount with its currency symbol, cents only for currencies that have them.
#[must_use]
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimals = if currency.is_integral() { 0 } else { 2 };
    format!("{}{}", currency.symbol(), format_number(amount, decimals))
}

/// Income in the positive colour, spending in the negative one.
#[must_use]
pub fn styled_amount(
    amount: f64,
    currency: Currency,
    transaction_type: TransactionType,
    theme: &Theme,
) -> Span<'static> {
    let (color, prefix) = match transaction_type {
        TransactionType::Income => (theme.positive, "+"),
        TransactionType::Pay => (theme.negative, "-"),
    };
    Span::styled(
        format!("{prefix}{}", format_amount(amount, currency)),
        Style::default().fg(color),
    )
}
