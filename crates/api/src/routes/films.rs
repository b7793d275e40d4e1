//! Route definitions for film endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// ```text
/// GET /top-rented-films       -> top_rented_films (?limit=)
/// GET /film/{id}              -> get_film
/// GET /film/{id}/inventory    -> film_inventory
/// GET /search-films           -> search_films (?query=&type=&limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top-rented-films", get(films::top_rented_films))
        .route("/film/{id}", get(films::get_film))
        .route("/film/{id}/inventory", get(films::film_inventory))
        .route("/search-films", get(films::search_films))
}
