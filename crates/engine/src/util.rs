//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every write path enforces the same invariants.

use uuid::Uuid;

use crate::{EngineError, Money, ResultEngine};

pub(crate) const EXPENSE_LABEL: &str = "Expense";

/// Parse an expense id coming from the outside world.
///
/// A malformed id cannot reference a stored record, so it is reported as
/// not found.
pub(crate) fn parse_expense_id(value: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| EngineError::KeyNotFound(EXPENSE_LABEL.to_string()))
}

pub(crate) fn normalize_title(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidTitle(
            "title must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

pub(crate) fn validate_amount(amount: Money) -> ResultEngine<Money> {
    if amount.is_negative() {
        return Err(EngineError::InvalidAmount(
            "amount must be >= 0".to_string(),
        ));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be <= {}",
            Money::MAX_AMOUNT
        )));
    }
    Ok(amount)
}
