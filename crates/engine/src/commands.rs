//! Command structs for engine operations.
//!
//! These types group the parameters of the write operations (create/update),
//! keeping call sites readable and avoiding long argument lists.

use chrono::NaiveDate;

use crate::{ExpenseCategory, Money};

/// Create an expense.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub description: Option<String>,
    /// Defaults to the current UTC date.
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    #[must_use]
    pub fn new(title: impl Into<String>, amount: Money, category: ExpenseCategory) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            description: None,
            date: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Partial update of an expense. `None` fields keep their stored value.
///
/// A blank `description` clears the stored description.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
