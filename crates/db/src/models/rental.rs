//! Rental entity model and DTOs.

use filmstore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rental` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub rental_id: DbId,
    pub rental_date: Timestamp,
    pub inventory_id: DbId,
    pub customer_id: DbId,
    pub return_date: Option<Timestamp>,
    pub staff_id: Option<DbId>,
    pub last_update: Timestamp,
}

/// DTO for opening a rental. Inputs are checked by the caller.
#[derive(Debug, Clone)]
pub struct CreateRental {
    pub inventory_id: DbId,
    pub customer_id: DbId,
    pub staff_id: Option<DbId>,
}

/// A rental joined to its film, as listed in a customer's history.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRental {
    pub rental_id: DbId,
    pub rental_date: Timestamp,
    pub return_date: Option<Timestamp>,
    pub inventory_id: DbId,
    pub film_id: DbId,
    pub title: String,
    pub rental_duration: i16,
    pub rental_rate: f64,
}
