#![allow(dead_code)]

use filmstore_core::types::DbId;
use sqlx::PgPool;

/// Ids of a minimal store: one store with active staff, one film with a
/// single copy.
pub struct Shop {
    pub store_id: DbId,
    pub staff_id: DbId,
    pub film_id: DbId,
    pub inventory_id: DbId,
}

pub async fn shop(pool: &PgPool) -> Shop {
    let address_id: DbId = sqlx::query_scalar(
        "INSERT INTO address (address, phone) VALUES ('28 MySQL Boulevard', '555-0101') \
         RETURNING address_id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let store_id: DbId =
        sqlx::query_scalar("INSERT INTO store (address_id) VALUES ($1) RETURNING store_id")
            .bind(address_id)
            .fetch_one(pool)
            .await
            .unwrap();
    let staff_id: DbId = sqlx::query_scalar(
        "INSERT INTO staff (first_name, last_name, store_id) VALUES ('Jon', 'Stephens', $1) \
         RETURNING staff_id",
    )
    .bind(store_id)
    .fetch_one(pool)
    .await
    .unwrap();
    let language_id: DbId =
        sqlx::query_scalar("INSERT INTO language (name) VALUES ('English') RETURNING language_id")
            .fetch_one(pool)
            .await
            .unwrap();
    let film_id = insert_film(pool, language_id, "Affair Prejudice").await;
    let inventory_id = insert_inventory(pool, film_id, store_id).await;
    Shop {
        store_id,
        staff_id,
        film_id,
        inventory_id,
    }
}

pub async fn insert_film(pool: &PgPool, language_id: DbId, title: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO film (title, language_id, rental_duration, rental_rate) \
         VALUES ($1, $2, 5, 0.99) RETURNING film_id",
    )
    .bind(title)
    .bind(language_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_inventory(pool: &PgPool, film_id: DbId, store_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO inventory (film_id, store_id) VALUES ($1, $2) RETURNING inventory_id",
    )
    .bind(film_id)
    .bind(store_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
