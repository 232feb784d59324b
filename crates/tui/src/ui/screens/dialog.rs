use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{AppState, Dialog, ExpenseForm, Field},
    ui::{
        components::{card::Card, category, centered_rect},
        theme::Theme,
    },
};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 15;

fn field_value(form: &ExpenseForm, field: Field) -> String {
    match field {
        Field::Title => form.title.clone(),
        Field::Amount => form.amount.clone(),
        Field::Date => form.date.clone(),
        Field::Description => form.description.clone(),
        Field::Category => match form.category {
            Some(category) => format!("{} {category}", category::glyph_for(category)),
            None => "‹ ← → to pick ›".to_string(),
        },
    }
}

fn field_line(form: &ExpenseForm, field: Field, theme: &Theme) -> Line<'static> {
    let focused = form.focus == field;
    let marker = if focused { "▸ " } else { "  " };
    let required = if field == Field::Description { " " } else { "*" };
    let cursor = if focused && field != Field::Category {
        "▏"
    } else {
        ""
    };

    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(format!("{:<12}{required} ", field.label()), label_style),
        Span::styled(
            format!("{}{cursor}", field_value(form, field)),
            Style::default().fg(theme.text),
        ),
    ])
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (title, action) = match state.dialog {
        Dialog::Edit(_) => ("Edit Expense", "Update"),
        Dialog::Add | Dialog::Closed => ("Add New Expense", "Add"),
    };
    let form = &state.form;

    let mut lines = vec![Line::from("")];
    for field in Field::ORDER {
        lines.push(field_line(form, field, theme));
        match &form.error {
            Some((invalid, hint)) if *invalid == field => {
                lines.push(Line::from(Span::styled(
                    format!("                 {hint}"),
                    Style::default().fg(theme.error),
                )));
            }
            _ => lines.push(Line::from("")),
        }
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(format!(" {action}  ")),
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" cancel"),
    ]));

    let popup = centered_rect(WIDTH, HEIGHT, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Card::new(title, theme).focused(true).block()),
        popup,
    );
}
