use sea_orm::{DbErr, QuerySelect, prelude::*};

use crate::{EngineError, Money, ResultEngine, expenses};

use super::Engine;

/// Sum of amounts and number of records across the whole store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpenseTotals {
    pub total: Money,
    pub count: u64,
}

impl Engine {
    /// Aggregates all expenses with a single `SUM`/`COUNT` query.
    ///
    /// An empty store yields `{ total: 0, count: 0 }`.
    pub async fn totals(&self) -> ResultEngine<ExpenseTotals> {
        let row: Option<(Option<i64>, i64)> = expenses::Entity::find()
            .select_only()
            .column_as(expenses::Column::AmountMinor.sum(), "total")
            .column_as(expenses::Column::Id.count(), "count")
            .into_tuple()
            .one(&self.database)
            .await?;

        totals_from_row(row.unwrap_or((None, 0)))
    }
}

fn totals_from_row((total, count): (Option<i64>, i64)) -> ResultEngine<ExpenseTotals> {
    let count = u64::try_from(count)
        .map_err(|_| EngineError::Database(DbErr::Custom(format!("invalid expense count {count}"))))?;

    Ok(ExpenseTotals {
        total: Money::new(total.unwrap_or(0)),
        count,
    })
}
