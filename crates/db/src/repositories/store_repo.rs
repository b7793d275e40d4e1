//! Existence checks for `store` and `staff`, used to refuse writes that
//! would reference a missing row.

use filmstore_core::types::DbId;
use sqlx::PgPool;

pub struct StoreRepo;

impl StoreRepo {
    pub async fn exists(pool: &PgPool, store_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM store WHERE store_id = $1)")
            .bind(store_id)
            .fetch_one(pool)
            .await
    }

    /// Whether an active staff member with the given id exists.
    pub async fn staff_exists(pool: &PgPool, staff_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM staff WHERE staff_id = $1 AND active)",
        )
        .bind(staff_id)
        .fetch_one(pool)
        .await
    }
}
