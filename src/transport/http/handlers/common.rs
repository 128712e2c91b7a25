use crate::app::error::WatchlistError;
use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl WatchlistError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WatchlistError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WatchlistError::MovieNotFound | WatchlistError::RouteNotFound => StatusCode::NOT_FOUND,
            WatchlistError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WatchlistError {
    fn into_response(self) -> Response {
        let error = match &self {
            WatchlistError::Storage(_) => "Failed to save movies.".to_string(),
            other => other.to_string(),
        };
        (self.status_code(), Json(ErrorResponse { error })).into_response()
    }
}

/// Catch-all for paths and methods no route handles.
pub async fn route_not_found_handler() -> WatchlistError {
    WatchlistError::RouteNotFound
}

/// Reads a `page` query value the way an integer cast would: leading
/// whitespace, optional sign, then as many digits as are present. Anything
/// else counts as 0; a missing value means the first page.
pub fn parse_page_param(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end]
        .parse::<i64>()
        .unwrap_or(if end == 0 { 0 } else { i64::MAX });
    if negative {
        -value
    } else {
        value
    }
}
