use filmstore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `inventory` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventory {
    pub inventory_id: DbId,
    pub film_id: DbId,
    pub store_id: DbId,
}

/// A copy of a film with its current availability.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryCopy {
    pub inventory_id: DbId,
    pub store_id: DbId,
    pub available: bool,
    /// The rental currently holding this copy, if any.
    pub open_rental_id: Option<DbId>,
}
