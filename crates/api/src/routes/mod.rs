pub mod actors;
pub mod customers;
pub mod films;
pub mod health;
pub mod rentals;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /top-rented-films                       report (GET)
/// /film/{id}                              film detail (GET)
/// /film/{id}/inventory                    copies + availability (GET)
/// /search-films                           ?query=&type=title|actor|genre (GET)
///
/// /top-actors                             report (GET)
/// /actor/{id}                             actor detail + films (GET)
///
/// /customers-simple                       active customers for pickers (GET)
/// /customers                              list (GET), create (POST)
/// /customers/{id}                         update (PUT), soft delete (DELETE)
/// /customers/{id}/details                 detail + aggregates (GET)
/// /customers/{id}/rentals                 rental history (GET)
///
/// /rentals                                open a rental (POST)
/// /rentals/{rental_id}/return             return a rental (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(films::router())
        .merge(actors::router())
        .merge(customers::router())
        .merge(rentals::router())
}
