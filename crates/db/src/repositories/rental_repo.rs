//! Repository for the `rental` table.

use filmstore_core::rental::RentalStatusFilter;
use filmstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{CreateRental, CustomerRental, Rental};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "rental_id, rental_date, inventory_id, customer_id, return_date, staff_id, last_update";

/// Provides rental lookups and the open/return writes.
pub struct RentalRepo;

impl RentalRepo {
    /// Find a rental by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rental WHERE rental_id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The open (unreturned) rental holding an inventory item, if any.
    pub async fn find_open_for_inventory(
        pool: &PgPool,
        inventory_id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rental \
             WHERE inventory_id = $1 AND return_date IS NULL"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(inventory_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of open rentals held by a customer.
    pub async fn count_open_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM rental WHERE customer_id = $1 AND return_date IS NULL",
        )
        .bind(customer_id)
        .fetch_one(pool)
        .await
    }

    /// Open a rental dated now.
    ///
    /// A second open rental for the same item violates
    /// `uq_rental_open_inventory`.
    pub async fn create(pool: &PgPool, input: &CreateRental) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rental (rental_date, inventory_id, customer_id, staff_id) \
             VALUES (now(), $1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.inventory_id)
            .bind(input.customer_id)
            .bind(input.staff_id)
            .fetch_one(pool)
            .await
    }

    /// Stamp `return_date = now()` on an open rental.
    ///
    /// Returns `None` if the rental does not exist or was already returned.
    pub async fn mark_returned(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rental SET return_date = now() \
             WHERE rental_id = $1 AND return_date IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A customer's rentals joined to their films, newest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
        status: RentalStatusFilter,
        limit: i64,
    ) -> Result<Vec<CustomerRental>, sqlx::Error> {
        let status_clause = match status {
            RentalStatusFilter::All => "",
            RentalStatusFilter::Active => "AND r.return_date IS NULL",
            RentalStatusFilter::Returned => "AND r.return_date IS NOT NULL",
        };
        let query = format!(
            "SELECT r.rental_id, r.rental_date, r.return_date, r.inventory_id, \
                    f.film_id, f.title, f.rental_duration, \
                    f.rental_rate::float8 AS rental_rate \
             FROM rental r \
             JOIN inventory i ON i.inventory_id = r.inventory_id \
             JOIN film f ON f.film_id = i.film_id \
             WHERE r.customer_id = $1 {status_clause} \
             ORDER BY r.rental_date DESC, r.rental_id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, CustomerRental>(&query)
            .bind(customer_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
