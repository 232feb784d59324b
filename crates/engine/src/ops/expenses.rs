use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, Select, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, Expense, ExpenseCategory, ExpensePatch, NewExpense, ResultEngine, expenses,
    util::{
        EXPENSE_LABEL, normalize_optional_text, normalize_title, parse_expense_id,
        validate_amount,
    },
};

use super::{Engine, with_tx};

/// Newest first: `date DESC`, then `created_at DESC`, then `id DESC` so that
/// equal dates still come back in a stable order.
fn newest_first(query: Select<expenses::Entity>) -> Select<expenses::Entity> {
    query
        .order_by_desc(expenses::Column::Date)
        .order_by_desc(expenses::Column::CreatedAt)
        .order_by_desc(expenses::Column::Id)
}

fn not_found() -> EngineError {
    EngineError::KeyNotFound(EXPENSE_LABEL.to_string())
}

impl Engine {
    /// Validates and stores a new expense, returning the stored record.
    pub async fn create_expense(&self, cmd: NewExpense) -> ResultEngine<Expense> {
        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4(),
            title: normalize_title(&cmd.title)?,
            amount: validate_amount(cmd.amount)?,
            category: cmd.category,
            description: normalize_optional_text(cmd.description.as_deref()),
            date: cmd.date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            updated_at: now,
        };

        let model = expenses::ActiveModel::from(&expense)
            .insert(&self.database)
            .await?;
        tracing::debug!(id = %model.id, category = %expense.category, "expense created");
        Expense::try_from(model)
    }

    /// Lists every expense, newest first.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        newest_first(expenses::Entity::find())
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::try_from)
            .collect()
    }

    /// Lists the expenses of one category, newest first.
    pub async fn list_expenses_by_category(
        &self,
        category: ExpenseCategory,
    ) -> ResultEngine<Vec<Expense>> {
        newest_first(
            expenses::Entity::find()
                .filter(expenses::Column::Category.eq(category.as_str())),
        )
        .all(&self.database)
        .await?
        .into_iter()
        .map(Expense::try_from)
        .collect()
    }

    /// Returns a single expense.
    ///
    /// Unknown and malformed ids both yield [`EngineError::KeyNotFound`].
    pub async fn expense(&self, expense_id: &str) -> ResultEngine<Expense> {
        let id = parse_expense_id(expense_id)?;
        let model = expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(not_found)?;
        Expense::try_from(model)
    }

    /// Applies a partial update and returns the updated record.
    ///
    /// Only the fields present in `patch` are validated and written; the rest
    /// keep their stored value. `updated_at` is always refreshed.
    pub async fn update_expense(
        &self,
        expense_id: &str,
        patch: ExpensePatch,
    ) -> ResultEngine<Expense> {
        let id = parse_expense_id(expense_id)?;
        with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(not_found)?;

            let mut active: expenses::ActiveModel = model.into();
            if let Some(title) = patch.title.as_deref() {
                active.title = ActiveValue::Set(normalize_title(title)?);
            }
            if let Some(amount) = patch.amount {
                active.amount_minor = ActiveValue::Set(validate_amount(amount)?.minor());
            }
            if let Some(category) = patch.category {
                active.category = ActiveValue::Set(category.as_str().to_string());
            }
            if let Some(description) = patch.description.as_deref() {
                active.description = ActiveValue::Set(normalize_optional_text(Some(description)));
            }
            if let Some(date) = patch.date {
                active.date = ActiveValue::Set(date);
            }
            active.updated_at = ActiveValue::Set(Utc::now());

            let updated = active.update(&db_tx).await?;
            tracing::debug!(id = %updated.id, "expense updated");
            Expense::try_from(updated)
        })
    }

    /// Deletes an expense. There is no soft delete.
    pub async fn delete_expense(&self, expense_id: &str) -> ResultEngine<()> {
        let id = parse_expense_id(expense_id)?;
        let result = expenses::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(not_found());
        }
        tracing::debug!(%id, "expense deleted");
        Ok(())
    }
}
