//! Add/edit dialog form values and their validation.

use api_types::expense::{Category, ExpenseNew, ExpenseUpdate, ExpenseView};
use chrono::NaiveDate;
use engine::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Amount,
    Category,
    Date,
    Description,
}

impl Field {
    pub const ORDER: [Field; 5] = [
        Self::Title,
        Self::Amount,
        Self::Category,
        Self::Date,
        Self::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
            Self::Description => "Description",
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Raw dialog input. Everything is text except the category picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: Option<Category>,
    pub date: String,
    pub description: String,
    pub focus: Field,
    /// Inline hint for the first invalid field.
    pub error: Option<(Field, String)>,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidExpense {
    pub title: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
}

impl ExpenseForm {
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: None,
            date: today.format("%Y-%m-%d").to_string(),
            description: String::new(),
            focus: Field::Title,
            error: None,
        }
    }

    pub fn from_expense(expense: &ExpenseView) -> Self {
        Self {
            title: expense.title.clone(),
            amount: Money::from_major(expense.amount)
                .map(|m| m.to_string())
                .unwrap_or_else(|_| expense.amount.to_string()),
            category: Some(expense.category),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: expense.description.clone().unwrap_or_default(),
            focus: Field::Title,
            error: None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Title => Some(&mut self.title),
            Field::Amount => Some(&mut self.amount),
            Field::Date => Some(&mut self.date),
            Field::Description => Some(&mut self.description),
            Field::Category => None,
        }
    }

    pub fn push(&mut self, ch: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(ch);
        }
    }

    pub fn pop(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Steps through [`Category::ALL`]; an unset picker starts at either end.
    pub fn cycle_category(&mut self, forward: bool) {
        let all = Category::ALL;
        let next = match self.category.and_then(|c| all.iter().position(|a| *a == c)) {
            None if forward => 0,
            None => all.len() - 1,
            Some(idx) if forward => (idx + 1) % all.len(),
            Some(idx) => (idx + all.len() - 1) % all.len(),
        };
        self.category = Some(all[next]);
    }

    pub fn validate(&self) -> Result<ValidExpense, (Field, String)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err((Field::Title, "Title is required".to_string()));
        }

        if self.amount.trim().is_empty() {
            return Err((Field::Amount, "Amount is required".to_string()));
        }
        let amount = self
            .amount
            .parse::<Money>()
            .map_err(|_| (Field::Amount, "Enter a number with up to 2 decimals".to_string()))?;
        if amount.is_negative() {
            return Err((Field::Amount, "Amount cannot be negative".to_string()));
        }
        if amount > Money::MAX_AMOUNT {
            return Err((Field::Amount, format!("Amount cannot exceed {}", Money::MAX_AMOUNT)));
        }

        let category = self
            .category
            .ok_or_else(|| (Field::Category, "Pick a category".to_string()))?;

        let date = api_types::date::parse(&self.date)
            .ok_or_else(|| (Field::Date, "Use YYYY-MM-DD".to_string()))?;

        Ok(ValidExpense {
            title: title.to_string(),
            amount,
            category,
            date,
            description: self.description.trim().to_string(),
        })
    }
}

impl ValidExpense {
    pub fn into_new(self) -> ExpenseNew {
        ExpenseNew {
            title: self.title,
            amount: self.amount.to_major(),
            category: self.category,
            description: (!self.description.is_empty()).then_some(self.description),
            date: Some(self.date),
        }
    }

    /// Sends every field; an empty description clears the stored one.
    pub fn into_update(self) -> ExpenseUpdate {
        ExpenseUpdate {
            title: Some(self.title),
            amount: Some(self.amount.to_major()),
            category: Some(self.category),
            description: Some(self.description),
            date: Some(self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn filled() -> ExpenseForm {
        let mut form = ExpenseForm::empty(today());
        form.title = "Coffee".to_string();
        form.amount = "4.50".to_string();
        form.category = Some(Category::Food);
        form
    }

    #[test]
    fn empty_form_defaults_to_today() {
        let form = ExpenseForm::empty(today());
        assert_eq!(form.date, "2024-01-01");
        assert!(form.category.is_none());
        assert_eq!(form.focus, Field::Title);
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(Field::Description.next(), Field::Title);
        assert_eq!(Field::Title.prev(), Field::Description);
        assert_eq!(Field::Amount.next(), Field::Category);
    }

    #[test]
    fn typing_skips_the_category_picker() {
        let mut form = ExpenseForm::empty(today());
        form.focus = Field::Category;
        form.push('x');
        assert!(form.category.is_none());

        form.focus = Field::Amount;
        form.push('7');
        form.pop();
        form.push('8');
        assert_eq!(form.amount, "8");
    }

    #[test]
    fn category_cycles_through_every_variant() {
        let mut form = ExpenseForm::empty(today());
        form.cycle_category(true);
        assert_eq!(form.category, Some(Category::Food));
        form.cycle_category(false);
        assert_eq!(form.category, Some(Category::Other));

        let mut backwards = ExpenseForm::empty(today());
        backwards.cycle_category(false);
        assert_eq!(backwards.category, Some(Category::Other));
    }

    #[test]
    fn valid_form_becomes_create_payload() {
        let payload = filled().validate().unwrap().into_new();
        assert_eq!(payload.title, "Coffee");
        assert_eq!(payload.amount, 4.5);
        assert_eq!(payload.category, Category::Food);
        assert_eq!(payload.date, Some(today()));
        assert!(payload.description.is_none());
    }

    #[test]
    fn edit_payload_clears_blank_description() {
        let mut form = filled();
        form.description = "   ".to_string();
        let payload = form.validate().unwrap().into_update();
        assert_eq!(payload.description.as_deref(), Some(""));
        assert_eq!(payload.amount, Some(4.5));
    }

    #[test]
    fn required_fields_are_reported_in_order() {
        let form = ExpenseForm::empty(today());
        assert_eq!(form.validate().unwrap_err().0, Field::Title);

        let mut form = filled();
        form.amount.clear();
        assert_eq!(form.validate().unwrap_err().0, Field::Amount);

        let mut form = filled();
        form.category = None;
        assert_eq!(form.validate().unwrap_err().0, Field::Category);

        let mut form = filled();
        form.date = "01/02/2024".to_string();
        assert_eq!(form.validate().unwrap_err().0, Field::Date);
    }

    #[test]
    fn amount_must_be_non_negative_with_two_decimals() {
        for bad in ["-1", "1.234", "ten", "1.2.3", "10000000000.01"] {
            let mut form = filled();
            form.amount = bad.to_string();
            assert_eq!(form.validate().unwrap_err().0, Field::Amount, "{bad}");
        }

        let mut form = filled();
        form.amount = "0".to_string();
        assert_eq!(form.validate().unwrap().amount, Money::ZERO);
    }

    #[test]
    fn edit_prefills_from_record() {
        let view = ExpenseView {
            id: uuid::Uuid::nil(),
            title: "Rent".to_string(),
            amount: 900.5,
            category: Category::Bills,
            description: Some("March".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let form = ExpenseForm::from_expense(&view);
        assert_eq!(form.title, "Rent");
        assert_eq!(form.amount, "900.50");
        assert_eq!(form.category, Some(Category::Bills));
        assert_eq!(form.date, "2024-03-01");
        assert_eq!(form.description, "March");
    }
}
