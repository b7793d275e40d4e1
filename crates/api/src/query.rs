//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for report endpoints. Clamped with
/// `filmstore_core::search::clamp_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
