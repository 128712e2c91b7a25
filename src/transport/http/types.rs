use crate::app::watchlist_service::WatchlistService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WatchlistService>,
}

/// Body of every error response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of movies currently stored.
    pub total: usize,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; out-of-range values are clamped.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

/// Create/update payload, for documentation only.
///
/// Bodies are decoded permissively: numbers may be sent as strings, `rating`
/// may be `""` or `null`, and `watched` accepts `true/false`, `1/0`,
/// `"yes"/"no"` and `"on"/"off"`.
#[derive(Deserialize, Debug, ToSchema)]
#[allow(dead_code)]
pub struct MoviePayload {
    /// Required, at most 80 characters after trimming.
    pub title: String,
    /// Required, at most 40 characters after trimming.
    pub genre: String,
    /// Between 1888 and next year.
    pub year: i64,
    /// Between 1 and 10.
    pub rating: Option<f64>,
    #[serde(default)]
    pub watched: bool,
}
