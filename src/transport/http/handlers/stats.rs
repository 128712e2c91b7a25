use crate::domain::stats::Stats;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Totals, average rating and genre breakdown", body = Stats)
    )
)]
pub async fn stats_handler(State(state): State<AppState>) -> Json<Stats> {
    Json(state.service.stats().await)
}
