//! Repository for the `customer` table.
//!
//! Customers are never hard-deleted: `soft_delete` clears `active`, and the
//! list queries, uniqueness check and update only see active rows.

use filmstore_core::search::{like_pattern, CustomerSearchField};
use filmstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{
    CreateCustomer, Customer, CustomerDetail, CustomerFilter, CustomerListItem, CustomerSummary,
    UpdateCustomer,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "customer_id, store_id, first_name, last_name, email, address_id, \
                       active, create_date, last_update";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Find a customer by id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer WHERE customer_id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active customer by id.
    pub async fn find_active(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer WHERE customer_id = $1 AND active");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All active customers, ordered by last then first name.
    pub async fn list_simple(pool: &PgPool) -> Result<Vec<CustomerSummary>, sqlx::Error> {
        sqlx::query_as::<_, CustomerSummary>(
            "SELECT customer_id, first_name, last_name, email \
             FROM customer \
             WHERE active \
             ORDER BY last_name, first_name, customer_id",
        )
        .fetch_all(pool)
        .await
    }

    /// One page of active customers matching `filter`.
    pub async fn list(
        pool: &PgPool,
        filter: &CustomerFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CustomerListItem>, sqlx::Error> {
        let select = "SELECT c.customer_id, c.store_id, c.first_name, c.last_name, c.email, \
                             c.address_id, c.active, c.create_date, \
                             (SELECT COUNT(*) FROM rental r \
                               WHERE r.customer_id = c.customer_id \
                                 AND r.return_date IS NULL) AS active_rentals \
                      FROM customer c \
                      WHERE c.active";
        let order = "ORDER BY c.last_name, c.first_name, c.customer_id";

        match search_predicate(filter) {
            Some((predicate, value)) => {
                let query = format!("{select} AND {predicate} {order} LIMIT $2 OFFSET $3");
                sqlx::query_as::<_, CustomerListItem>(&query)
                    .bind(value)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("{select} {order} LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, CustomerListItem>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Total number of active customers matching `filter`.
    pub async fn count(pool: &PgPool, filter: &CustomerFilter) -> Result<i64, sqlx::Error> {
        match search_predicate(filter) {
            Some((predicate, value)) => {
                let query =
                    format!("SELECT COUNT(*) FROM customer c WHERE c.active AND {predicate}");
                sqlx::query_scalar::<_, i64>(&query)
                    .bind(value)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customer c WHERE c.active")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Whether another active customer already uses `email` (case-insensitive).
    pub async fn email_in_use(
        pool: &PgPool,
        email: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(\
                SELECT 1 FROM customer \
                WHERE active \
                  AND lower(email) = lower($1) \
                  AND ($2::int4 IS NULL OR customer_id <> $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new active customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer (store_id, first_name, last_name, email, address_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(input.store_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.address_id)
            .fetch_one(pool)
            .await
    }

    /// Update an active customer. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no active customer with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customer SET \
                store_id = COALESCE($2, store_id), \
                first_name = COALESCE($3, first_name), \
                last_name = COALESCE($4, last_name), \
                email = COALESCE($5, email), \
                address_id = COALESCE($6, address_id) \
             WHERE customer_id = $1 AND active \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(input.store_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.address_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a customer inactive. Returns `false` if already inactive or missing.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE customer SET active = false WHERE customer_id = $1 AND active")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a customer with address and rental/payment aggregates.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomerDetail>, sqlx::Error> {
        sqlx::query_as::<_, CustomerDetail>(
            "SELECT c.customer_id, c.store_id, c.first_name, c.last_name, c.email, c.active, \
                    c.create_date, c.address_id, \
                    a.address, a.district, a.city, a.postal_code, a.phone, \
                    (SELECT COUNT(*) FROM rental r \
                      WHERE r.customer_id = c.customer_id) AS total_rentals, \
                    (SELECT COUNT(*) FROM rental r \
                      WHERE r.customer_id = c.customer_id \
                        AND r.return_date IS NULL) AS active_rentals, \
                    (SELECT COALESCE(SUM(p.amount), 0)::float8 FROM payment p \
                      WHERE p.customer_id = c.customer_id) AS total_spent, \
                    (SELECT MAX(r.rental_date) FROM rental r \
                      WHERE r.customer_id = c.customer_id) AS last_rental_date \
             FROM customer c \
             LEFT JOIN address a ON a.address_id = c.address_id \
             WHERE c.customer_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

/// SQL predicate (bound at `$1`) and its parameter for a customer search.
///
/// Returns `None` when there is no search term.
fn search_predicate(filter: &CustomerFilter) -> Option<(&'static str, String)> {
    let term = filter.search.as_deref()?;
    let (predicate, value) = match filter.field {
        CustomerSearchField::All => (
            "((c.first_name || ' ' || c.last_name) ILIKE $1 OR c.email ILIKE $1)",
            like_pattern(term),
        ),
        CustomerSearchField::Name => (
            "(c.first_name || ' ' || c.last_name) ILIKE $1",
            like_pattern(term),
        ),
        CustomerSearchField::Email => ("c.email ILIKE $1", like_pattern(term)),
        CustomerSearchField::Id => ("c.customer_id::text = $1", term.to_string()),
    };
    Some((predicate, value))
}
