use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Categories", theme).focused(true);
    let categories = state.vm.categories();

    if categories.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::raw("No categories. Press "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" to add one."),
        ]))
        .alignment(Alignment::Center);
        card.render_with(frame, area, empty);
        return;
    }

    let items: Vec<ListItem> = categories
        .iter()
        .map(|category| {
            ListItem::new(Span::styled(
                category.category_name.as_str(),
                Style::default().fg(theme.text),
            ))
        })
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
