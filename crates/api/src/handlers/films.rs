//! Handlers for film reports, lookups, inventory and search.

use axum::extract::State;
use axum::Json;
use filmstore_core::search::{
    clamp_limit, like_pattern, normalize_query, FilmSearchKind, DEFAULT_SEARCH_LIMIT,
    DEFAULT_TOP_LIMIT, MAX_SEARCH_LIMIT, MAX_TOP_LIMIT,
};
use filmstore_core::types::DbId;
use filmstore_db::models::film::{FilmDetail, FilmSearchResult, TopRentedFilm};
use filmstore_db::models::inventory::InventoryCopy;
use filmstore_db::repositories::{FilmRepo, InventoryRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::LimitParams;
use crate::state::AppState;

/// Query parameters for `GET /api/search-films`.
#[derive(Debug, Deserialize)]
pub struct FilmSearchParams {
    pub query: Option<String>,
    /// `title` (default), `actor` or `genre`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/top-rented-films
pub async fn top_rented_films(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<Json<Vec<TopRentedFilm>>> {
    let limit = clamp_limit(params.limit, DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT);
    let films = FilmRepo::top_rented(&state.pool, limit).await?;
    Ok(Json(films))
}

/// GET /api/film/{id}
///
/// Film columns plus language, categories, cast and copy/rental counts.
pub async fn get_film(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<FilmDetail>> {
    let film = FilmRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Film", id))?;
    Ok(Json(film))
}

/// GET /api/film/{id}/inventory
///
/// Every copy of the film with whether it is currently rentable.
pub async fn film_inventory(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<InventoryCopy>>> {
    if !FilmRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Film", id));
    }
    let copies = InventoryRepo::list_for_film(&state.pool, id).await?;
    Ok(Json(copies))
}

/// GET /api/search-films?query=&type=
///
/// Case-insensitive substring match on title, actor name or category name.
pub async fn search_films(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FilmSearchParams>,
) -> AppResult<Json<Vec<FilmSearchResult>>> {
    let kind = FilmSearchKind::from_param(params.kind.as_deref())?;
    let term = params
        .query
        .as_deref()
        .and_then(normalize_query)
        .ok_or_else(|| AppError::validation("query is required"))?;
    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);

    let films = FilmRepo::search(&state.pool, kind, &like_pattern(&term), limit).await?;
    tracing::debug!(kind = kind.as_str(), term = %term, hits = films.len(), "Film search");
    Ok(Json(films))
}
