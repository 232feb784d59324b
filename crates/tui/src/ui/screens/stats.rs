use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::{
    app::AppState,
    ui::{
        components::{card::StatCard, money::format_usd},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let [total, count, average] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);

    StatCard::new("Total Spent", "💰", format_usd(state.totals.total), theme).render(frame, total);
    StatCard::new("Total Expenses", "🧾", state.totals.count.to_string(), theme)
        .render(frame, count);
    StatCard::new("Average Expense", "📈", format_usd(state.average()), theme)
        .render(frame, average);
}
