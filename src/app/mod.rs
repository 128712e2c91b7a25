pub mod error;
pub mod watchlist_service;
