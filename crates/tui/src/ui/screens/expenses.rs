use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use api_types::expense::ExpenseView;

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, category, money::styled_amount},
        theme::Theme,
    },
};

const TITLE_WIDTH: usize = 28;

/// `Jan 1, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text:<width$}")
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

fn expense_item<'a>(expense: &'a ExpenseView, theme: &Theme) -> ListItem<'a> {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", category::glyph_for(expense.category))),
        Span::styled(
            fit(&expense.title, TITLE_WIDTH),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {:<15}", expense.category.as_str()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            format!("{:<14}", format_date(expense.date)),
            Style::default().fg(theme.dim),
        ),
        styled_amount(expense.amount, theme),
    ])];

    if let Some(description) = expense.description.as_deref() {
        lines.push(Line::from(Span::styled(
            format!("   {description}"),
            Style::default().fg(theme.dim),
        )));
    }

    ListItem::new(lines)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = match state.filter {
        Some(category) => format!("Recent Expenses · {category}"),
        None => "Recent Expenses".to_string(),
    };

    let items: Vec<ListItem<'_>> = state
        .expenses
        .iter()
        .map(|expense| expense_item(expense, theme))
        .collect();

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    let list = List::new(items)
        .block(Card::new(&title, theme).focused(true).block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_short_month_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(date), "Jan 1, 2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_date(date), "Dec 25, 2023");
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(fit("Coffee", 8), "Coffee  ");
        assert_eq!(fit("Groceries for the week", 10), "Groceries…");
    }
}
