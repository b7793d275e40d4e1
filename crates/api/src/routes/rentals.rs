//! Route definitions for the `/rentals` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::rentals;
use crate::state::AppState;

/// ```text
/// POST /rentals                       -> create_rental
/// PUT  /rentals/{rental_id}/return    -> return_rental
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rentals", post(rentals::create_rental))
        .route("/rentals/{rental_id}/return", put(rentals::return_rental))
}
