//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "data/movies.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_FRONTEND_DIR: &str = "static";
pub const DEFAULT_LOG_FILTER: &str = "movie_watchlist=info,api_server=info,tower_http=info";

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// JSON file holding the whole watchlist.
pub fn data_file() -> PathBuf {
    PathBuf::from(var_or("WATCHLIST_DATA_FILE", DEFAULT_DATA_FILE))
}

/// Address the API server listens on.
pub fn bind_addr() -> String {
    var_or("WATCHLIST_BIND_ADDR", DEFAULT_BIND_ADDR)
}

/// Directory with the browser frontend, if it exists.
pub fn frontend_dir() -> Option<PathBuf> {
    let dir = PathBuf::from(var_or("WATCHLIST_FRONTEND_DIR", DEFAULT_FRONTEND_DIR));
    dir.is_dir().then_some(dir)
}

/// `tracing` filter directives; `RUST_LOG` wins when set.
pub fn log_filter() -> String {
    var_or("RUST_LOG", DEFAULT_LOG_FILTER)
}
