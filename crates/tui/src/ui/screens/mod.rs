pub mod confirm;
pub mod dialog;
pub mod empty;
pub mod expenses;
pub mod stats;
