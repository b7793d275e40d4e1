//! Film report and lookup rows.
//!
//! Money columns are `NUMERIC` in the schema and cast to `float8` in the
//! queries, so they surface here as `f64`.

use filmstore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row of the top-rented-films report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopRentedFilm {
    pub film_id: DbId,
    pub title: String,
    pub rating: Option<String>,
    /// Comma-joined category names.
    pub categories: Option<String>,
    pub rental_count: i64,
}

/// A film with its language, cast, categories and copy/rental aggregates
/// flattened into one object.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmDetail {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub rental_duration: i16,
    pub rental_rate: f64,
    pub length: Option<i16>,
    pub replacement_cost: f64,
    pub rating: Option<String>,
    pub language: String,
    pub categories: Option<String>,
    /// Comma-joined "First Last" names ordered by last name.
    pub actors: Option<String>,
    pub rental_count: i64,
    pub total_copies: i64,
    pub available_copies: i64,
    pub active_rentals: i64,
}

/// A film search hit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmSearchResult {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub rental_rate: f64,
    pub categories: Option<String>,
    pub actors: Option<String>,
}
