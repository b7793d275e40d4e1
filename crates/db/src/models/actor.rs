//! Actor report and lookup rows.

use filmstore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row of the top-actors report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopActor {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub film_count: i64,
    /// Rentals of any copy of any film the actor appears in.
    pub rental_count: i64,
}

/// An actor with film/rental aggregates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorDetail {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub film_count: i64,
    pub rental_count: i64,
    /// Distinct category names across the actor's films, comma-joined.
    pub categories: Option<String>,
}

/// A film in an actor's filmography.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorFilm {
    pub film_id: DbId,
    pub title: String,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
}
