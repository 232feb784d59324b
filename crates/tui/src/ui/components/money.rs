use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Formats a major-unit amount as US dollars: `$1,234.50`, `-$3.00`.
///
/// Values are rounded to the cent first, so averages like `7.875` print as
/// `$7.88`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Expense amount as shown in the list: bold, in the amount colour.
#[must_use]
pub fn styled_amount(amount: f64, theme: &Theme) -> Span<'static> {
    Span::styled(
        format_usd(amount),
        Style::default()
            .fg(theme.amount)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd_with_grouping() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(4.5), "$4.50");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(999.99), "$999.99");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_usd(7.875), "$7.88");
        assert_eq!(format_usd(0.1 + 0.2), "$0.30");
    }

    #[test]
    fn negative_sign_goes_before_the_symbol() {
        assert_eq!(format_usd(-3.0), "-$3.00");
    }
}
