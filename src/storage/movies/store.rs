use crate::domain::movie::Movie;
use async_trait::async_trait;

/// Whole-collection persistence for the watchlist.
///
/// Every request loads the full collection and every mutation saves it back;
/// implementations keep no per-record state.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns the stored collection, newest first. Missing or unreadable
    /// data yields an empty collection.
    async fn load(&self) -> Vec<Movie>;

    /// Replaces the stored collection with `movies`.
    async fn save(&self, movies: &[Movie]) -> anyhow::Result<()>;
}
