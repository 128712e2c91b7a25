use crate::domain::movie::ValidationError;

/// Failures surfaced to API callers.
#[derive(Debug, thiserror::Error)]
pub enum WatchlistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Movie not found.")]
    MovieNotFound,
    #[error("Route not found. Use /movies or /stats.")]
    RouteNotFound,
    /// The data file could not be written. Details are logged, not returned.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
