use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::ui::{
    components::{card::Card, centered_rect},
    theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from("Are you sure you want to delete this expense?"),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.error)),
            Span::raw(" delete  "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" keep"),
        ]),
    ];

    let popup = centered_rect(52, 5, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Card::new("Delete", theme).focused(true).block()),
        popup,
    );
}
