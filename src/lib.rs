pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::error::WatchlistError;
pub use app::watchlist_service::WatchlistService;
pub use domain::movie::{Movie, MovieInput};
pub use domain::stats::Stats;
pub use storage::movies::{InMemoryMovieStore, JsonFileStore, MovieStore};
