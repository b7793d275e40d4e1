//! Route definitions for actor endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// ```text
/// GET /top-actors     -> top_actors (?limit=)
/// GET /actor/{id}     -> get_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top-actors", get(actors::top_actors))
        .route("/actor/{id}", get(actors::get_actor))
}
