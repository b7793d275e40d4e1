//! Repository for the `actor` table and its report queries.

use filmstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{ActorDetail, ActorFilm, TopActor};

/// Provides read queries over actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Actors ordered by total rentals of the films they appear in.
    ///
    /// Actors with no films are omitted.
    pub async fn top_actors(pool: &PgPool, limit: i64) -> Result<Vec<TopActor>, sqlx::Error> {
        sqlx::query_as::<_, TopActor>(
            "SELECT a.actor_id, a.first_name, a.last_name, \
                    COUNT(DISTINCT fa.film_id) AS film_count, \
                    COUNT(r.rental_id) AS rental_count \
             FROM actor a \
             JOIN film_actor fa ON fa.actor_id = a.actor_id \
             LEFT JOIN inventory i ON i.film_id = fa.film_id \
             LEFT JOIN rental r ON r.inventory_id = i.inventory_id \
             GROUP BY a.actor_id, a.first_name, a.last_name \
             ORDER BY rental_count DESC, film_count DESC, a.last_name, a.first_name \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find an actor with film/rental aggregates.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ActorDetail>, sqlx::Error> {
        sqlx::query_as::<_, ActorDetail>(
            "SELECT a.actor_id, a.first_name, a.last_name, \
                    (SELECT COUNT(*) FROM film_actor fa \
                      WHERE fa.actor_id = a.actor_id) AS film_count, \
                    (SELECT COUNT(*) FROM film_actor fa \
                       JOIN inventory i ON i.film_id = fa.film_id \
                       JOIN rental r ON r.inventory_id = i.inventory_id \
                      WHERE fa.actor_id = a.actor_id) AS rental_count, \
                    (SELECT string_agg(DISTINCT c.name, ', ' ORDER BY c.name) \
                       FROM film_actor fa \
                       JOIN film_category fc ON fc.film_id = fa.film_id \
                       JOIN category c ON c.category_id = fc.category_id \
                      WHERE fa.actor_id = a.actor_id) AS categories \
             FROM actor a \
             WHERE a.actor_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// The actor's films ordered by title.
    pub async fn list_films(pool: &PgPool, actor_id: DbId) -> Result<Vec<ActorFilm>, sqlx::Error> {
        sqlx::query_as::<_, ActorFilm>(
            "SELECT f.film_id, f.title, f.release_year, f.rating \
             FROM film_actor fa \
             JOIN film f ON f.film_id = fa.film_id \
             WHERE fa.actor_id = $1 \
             ORDER BY f.title, f.film_id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
