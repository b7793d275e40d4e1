//! Repository for the `film` table and its report queries.

use filmstore_core::search::FilmSearchKind;
use filmstore_core::types::DbId;
use sqlx::PgPool;

use super::{FILM_ACTORS, FILM_CATEGORIES};
use crate::models::film::{FilmDetail, FilmSearchResult, TopRentedFilm};

/// Provides read queries over films.
pub struct FilmRepo;

impl FilmRepo {
    /// Whether a film with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM film WHERE film_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Films ordered by how many times any of their copies has been rented.
    ///
    /// Films never rented are omitted. Ties break on title.
    pub async fn top_rented(pool: &PgPool, limit: i64) -> Result<Vec<TopRentedFilm>, sqlx::Error> {
        let query = format!(
            "SELECT f.film_id, f.title, f.rating, \
                    {FILM_CATEGORIES} AS categories, \
                    COUNT(r.rental_id) AS rental_count \
             FROM film f \
             JOIN inventory i ON i.film_id = f.film_id \
             JOIN rental r ON r.inventory_id = i.inventory_id \
             GROUP BY f.film_id, f.title, f.rating \
             ORDER BY rental_count DESC, f.title \
             LIMIT $1"
        );
        sqlx::query_as::<_, TopRentedFilm>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a film with its aggregates flattened into one row.
    ///
    /// `available_copies` counts copies with no open rental, so
    /// `available_copies + active_rentals == total_copies`.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<FilmDetail>, sqlx::Error> {
        let query = format!(
            "SELECT f.film_id, f.title, f.description, f.release_year, f.rental_duration, \
                    f.rental_rate::float8 AS rental_rate, f.length, \
                    f.replacement_cost::float8 AS replacement_cost, f.rating, \
                    l.name AS language, \
                    {FILM_CATEGORIES} AS categories, \
                    {FILM_ACTORS} AS actors, \
                    (SELECT COUNT(*) FROM rental r \
                       JOIN inventory i ON i.inventory_id = r.inventory_id \
                      WHERE i.film_id = f.film_id) AS rental_count, \
                    (SELECT COUNT(*) FROM inventory i \
                      WHERE i.film_id = f.film_id) AS total_copies, \
                    (SELECT COUNT(*) FROM inventory i \
                      WHERE i.film_id = f.film_id \
                        AND NOT EXISTS (SELECT 1 FROM rental r \
                                         WHERE r.inventory_id = i.inventory_id \
                                           AND r.return_date IS NULL)) AS available_copies, \
                    (SELECT COUNT(*) FROM rental r \
                       JOIN inventory i ON i.inventory_id = r.inventory_id \
                      WHERE i.film_id = f.film_id AND r.return_date IS NULL) AS active_rentals \
             FROM film f \
             JOIN language l ON l.language_id = f.language_id \
             WHERE f.film_id = $1"
        );
        sqlx::query_as::<_, FilmDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search dispatched on `kind`.
    ///
    /// `pattern` is a ready `ILIKE` pattern (see `filmstore_core::search::like_pattern`).
    pub async fn search(
        pool: &PgPool,
        kind: FilmSearchKind,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<FilmSearchResult>, sqlx::Error> {
        let predicate = match kind {
            FilmSearchKind::Title => "f.title ILIKE $1",
            FilmSearchKind::Actor => {
                "EXISTS (SELECT 1 FROM film_actor fa \
                           JOIN actor a ON a.actor_id = fa.actor_id \
                          WHERE fa.film_id = f.film_id \
                            AND (a.first_name || ' ' || a.last_name) ILIKE $1)"
            }
            FilmSearchKind::Genre => {
                "EXISTS (SELECT 1 FROM film_category fc \
                           JOIN category c ON c.category_id = fc.category_id \
                          WHERE fc.film_id = f.film_id \
                            AND c.name ILIKE $1)"
            }
        };
        let query = format!(
            "SELECT f.film_id, f.title, f.description, f.release_year, f.rating, \
                    f.rental_rate::float8 AS rental_rate, \
                    {FILM_CATEGORIES} AS categories, \
                    {FILM_ACTORS} AS actors \
             FROM film f \
             WHERE {predicate} \
             ORDER BY f.title, f.film_id \
             LIMIT $2"
        );
        sqlx::query_as::<_, FilmSearchResult>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
