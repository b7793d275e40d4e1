pub mod actors;
pub mod customers;
pub mod films;
pub mod rentals;

use crate::error::{AppError, AppResult};

/// Unwrap a required request field, or fail with 400 naming it.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::validation(format!("{field} is required")))
}
