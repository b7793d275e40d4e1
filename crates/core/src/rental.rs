//! Rental lifecycle rules: open vs returned, due dates, overdue checks.

use std::str::FromStr;

use chrono::Duration;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Default number of rows in a customer's rental history.
pub const DEFAULT_HISTORY_LIMIT: i64 = 100;

/// Maximum number of rows in a customer's rental history.
pub const MAX_HISTORY_LIMIT: i64 = 500;

/// State of a single rental row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    /// `return_date` is NULL.
    Active,
    Returned,
}

impl RentalStatus {
    pub fn from_return_date(return_date: Option<Timestamp>) -> Self {
        match return_date {
            Some(_) => Self::Returned,
            None => Self::Active,
        }
    }
}

/// Filter applied to a customer's rental history (`?status=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RentalStatusFilter {
    #[default]
    All,
    Active,
    Returned,
}

impl RentalStatusFilter {
    pub const ACCEPTED: &'static str = "all, active, returned";

    pub fn from_param(value: Option<&str>) -> Result<Self, CoreError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }
}

impl FromStr for RentalStatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "returned" => Ok(Self::Returned),
            other => Err(CoreError::Validation(format!(
                "Invalid rental status '{other}'. Must be one of: {}",
                Self::ACCEPTED
            ))),
        }
    }
}

/// Date a rental is due back, from the film's `rental_duration` in days.
pub fn due_date(rental_date: Timestamp, rental_duration_days: i16) -> Timestamp {
    rental_date + Duration::days(i64::from(rental_duration_days.max(0)))
}

/// A rental is overdue when it came back (or is still out at `now`) after its due date.
pub fn is_overdue(
    rental_date: Timestamp,
    rental_duration_days: i16,
    return_date: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    let due = due_date(rental_date, rental_duration_days);
    return_date.unwrap_or(now) > due
}
