pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Dialog};

use theme::Theme;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let [header, stats, content, bottom] = Layout::vertical([
        Constraint::Length(2), // Title + tagline
        Constraint::Length(4), // Stat cards
        Constraint::Min(0),    // List
        Constraint::Length(1), // Key hints
    ])
    .areas(area);

    render_header(frame, header, &theme);
    screens::stats::render(frame, stats, state, &theme);
    if state.expenses.is_empty() {
        screens::empty::render(frame, content, state, &theme);
    } else {
        screens::expenses::render(frame, content, state, &theme);
    }
    render_bottom_bar(frame, bottom, state, &theme);

    if state.dialog != Dialog::Closed {
        screens::dialog::render(frame, area, state, &theme);
    } else if state.confirm_delete.is_some() {
        screens::confirm::render(frame, area, &theme);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Personal Expense Tracker",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track your spending and manage your finances",
            Style::default().fg(theme.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));

    let mut parts = vec![
        key("a"),
        Span::raw(" add  "),
        key("e"),
        Span::raw(" edit  "),
        key("d"),
        Span::raw(" delete  "),
        key("↑↓"),
        Span::raw(" select  "),
        key("f"),
        Span::raw(" filter  "),
        key("r"),
        Span::raw(" refresh"),
    ];

    if let Some(category) = state.filter {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::raw(format!("Category: {category} ")));
        parts.push(key("Esc"));
        parts.push(Span::raw(" all"));
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(key("q"));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
