//! Handlers for actor reports and lookups.

use axum::extract::State;
use axum::Json;
use filmstore_core::search::{clamp_limit, DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT};
use filmstore_core::types::DbId;
use filmstore_db::models::actor::{ActorDetail, ActorFilm, TopActor};
use filmstore_db::repositories::ActorRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::LimitParams;
use crate::state::AppState;

/// An actor's aggregates with their filmography.
#[derive(Debug, Serialize)]
pub struct ActorResponse {
    #[serde(flatten)]
    pub actor: ActorDetail,
    pub films: Vec<ActorFilm>,
}

/// GET /api/top-actors
pub async fn top_actors(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<Json<Vec<TopActor>>> {
    let limit = clamp_limit(params.limit, DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT);
    let actors = ActorRepo::top_actors(&state.pool, limit).await?;
    Ok(Json(actors))
}

/// GET /api/actor/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ActorResponse>> {
    let actor = ActorRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Actor", id))?;
    let films = ActorRepo::list_films(&state.pool, id).await?;
    Ok(Json(ActorResponse { actor, films }))
}
