//! Expense store.
//!
//! [`Engine`] owns the persistence boundary: every create/read/update/delete
//! and aggregate over [`Expense`] records goes through it. Inputs are
//! validated here before they reach the database.

pub use category::ExpenseCategory;
pub use commands::{ExpensePatch, NewExpense};
pub use error::EngineError;
pub use expenses::Expense;
pub use money::Money;
pub use ops::{Engine, EngineBuilder, ExpenseTotals};

mod category;
mod commands;
mod error;
mod expenses;
mod money;
mod ops;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
