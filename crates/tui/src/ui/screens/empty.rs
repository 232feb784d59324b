use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let headline = match state.filter {
        Some(category) => format!("No {category} expenses"),
        None => "No expenses yet".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from("📥"),
        Line::from(Span::styled(
            headline,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Start tracking your expenses by adding your first one!",
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" to add your first expense"),
        ]),
    ];

    let block = Card::new("Recent Expenses", theme).block();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
