//! Customer entity model and DTOs.

use filmstore_core::search::CustomerSearchField;
use filmstore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customer` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub customer_id: DbId,
    pub store_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address_id: Option<DbId>,
    pub active: bool,
    pub create_date: Timestamp,
    pub last_update: Timestamp,
}

/// Minimal customer projection for pickers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerSummary {
    pub customer_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

/// A customer row in the paginated list, with open-rental count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerListItem {
    pub customer_id: DbId,
    pub store_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address_id: Option<DbId>,
    pub active: bool,
    pub create_date: Timestamp,
    pub active_rentals: i64,
}

/// A customer with address and rental/payment aggregates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerDetail {
    pub customer_id: DbId,
    pub store_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub active: bool,
    pub create_date: Timestamp,
    pub address_id: Option<DbId>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub total_rentals: i64,
    pub active_rentals: i64,
    pub total_spent: f64,
    pub last_rental_date: Option<Timestamp>,
}

/// DTO for creating a customer. Names and email are stored as given, so
/// callers normalize them first.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub store_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address_id: Option<DbId>,
}

/// DTO for updating a customer. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomer {
    pub store_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address_id: Option<DbId>,
}

impl UpdateCustomer {
    pub fn is_empty(&self) -> bool {
        self.store_id.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.address_id.is_none()
    }
}

/// Search filter for the customer list. Soft-deleted customers are always
/// excluded.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub search: Option<String>,
    pub field: CustomerSearchField,
}
