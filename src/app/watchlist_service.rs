//! The watchlist service.
//!
//! Sits between the HTTP handlers and the [`MovieStore`]. Each call is
//! request-scoped: it loads the whole collection, applies one operation and,
//! for mutations, saves the whole collection back. No state is cached between
//! calls, and concurrent writers are not serialized (the last save wins).

use crate::app::error::WatchlistError;
use crate::domain::movie::{unique_movie_id, validate_movie, Movie, MovieInput};
use crate::domain::page::{paginate, MoviePage};
use crate::domain::stats::{compute_stats, Stats};
use crate::storage::movies::MovieStore;
use chrono::Datelike;
use std::sync::Arc;

pub struct WatchlistService {
    store: Arc<dyn MovieStore>,
}

impl WatchlistService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn MovieStore> {
        &self.store
    }

    pub async fn list_page(&self, page: i64) -> MoviePage {
        paginate(self.store.load().await, page)
    }

    pub async fn stats(&self) -> Stats {
        compute_stats(&self.store.load().await)
    }

    pub async fn total(&self) -> usize {
        self.store.load().await.len()
    }

    /// Validates and stores a new movie at the front of the watchlist.
    pub async fn create(&self, input: &MovieInput) -> Result<Movie, WatchlistError> {
        validate_movie(input, true, current_year())?;

        let mut movies = self.store.load().await;
        let movie = Movie::from_input(unique_movie_id(&movies), input);
        movies.insert(0, movie.clone());
        self.persist(&movies).await?;

        tracing::info!(id = %movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    /// Replaces every field of movie `id` with `input`, keeping the id.
    pub async fn update(&self, id: &str, input: &MovieInput) -> Result<Movie, WatchlistError> {
        let mut movies = self.store.load().await;
        let idx = find_index(&movies, id).ok_or(WatchlistError::MovieNotFound)?;

        validate_movie(input, true, current_year())?;

        let movie = Movie::from_input(id.to_string(), input);
        movies[idx] = movie.clone();
        self.persist(&movies).await?;

        tracing::info!(id = %movie.id, "movie updated");
        Ok(movie)
    }

    pub async fn delete(&self, id: &str) -> Result<(), WatchlistError> {
        let mut movies = self.store.load().await;
        let idx = find_index(&movies, id).ok_or(WatchlistError::MovieNotFound)?;

        movies.remove(idx);
        self.persist(&movies).await?;

        tracing::info!(%id, remaining = movies.len(), "movie deleted");
        Ok(())
    }

    async fn persist(&self, movies: &[Movie]) -> Result<(), WatchlistError> {
        self.store.save(movies).await.map_err(|e| {
            tracing::error!(error = %format!("{:#}", e), "failed to save watchlist");
            WatchlistError::Storage(e)
        })
    }
}

fn find_index(movies: &[Movie], id: &str) -> Option<usize> {
    movies.iter().position(|m| m.id == id)
}

/// Local calendar year; the upper year bound is one past it.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
