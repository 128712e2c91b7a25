use crate::domain::movie::Movie;
use crate::storage::movies::MovieStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store, used by tests and for embedding without a data file.
#[derive(Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn load(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    async fn save(&self, movies: &[Movie]) -> anyhow::Result<()> {
        *self.movies.write().await = movies.to_vec();
        Ok(())
    }
}
