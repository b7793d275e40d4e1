//! Repository for the `inventory` table.

use filmstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory::{Inventory, InventoryCopy};

/// Provides read queries over inventory copies.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Find an inventory item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        sqlx::query_as::<_, Inventory>(
            "SELECT inventory_id, film_id, store_id FROM inventory WHERE inventory_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// All copies of a film with availability, ordered by store then id.
    pub async fn list_for_film(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<InventoryCopy>, sqlx::Error> {
        sqlx::query_as::<_, InventoryCopy>(
            "SELECT i.inventory_id, i.store_id, \
                    (r.rental_id IS NULL) AS available, \
                    r.rental_id AS open_rental_id \
             FROM inventory i \
             LEFT JOIN rental r ON r.inventory_id = i.inventory_id AND r.return_date IS NULL \
             WHERE i.film_id = $1 \
             ORDER BY i.store_id, i.inventory_id",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }
}
