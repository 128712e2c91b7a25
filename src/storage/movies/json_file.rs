//! Movie store backed by a single pretty-printed JSON array on disk.

use crate::domain::movie::Movie;
use crate::storage::movies::MovieStore;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// What was found at the data file path.
#[derive(Debug)]
pub enum DataFileStatus {
    Missing,
    /// A JSON array. `skipped` holds the positions of records that had no
    /// usable id and were left out of `movies`.
    Valid {
        movies: Vec<Movie>,
        skipped: Vec<usize>,
    },
    /// The file exists but could not be read or is not a JSON array.
    Corrupt(String),
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub async fn inspect(&self) -> DataFileStatus {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return DataFileStatus::Missing,
            Err(e) => return DataFileStatus::Corrupt(e.to_string()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return DataFileStatus::Valid {
                movies: Vec::new(),
                skipped: Vec::new(),
            };
        }
        let records = match serde_json::from_slice::<JsonValue>(&bytes) {
            Ok(JsonValue::Array(records)) => records,
            Ok(_) => return DataFileStatus::Corrupt("expected a JSON array".to_string()),
            Err(e) => return DataFileStatus::Corrupt(e.to_string()),
        };

        let mut movies = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            match Movie::from_stored(record) {
                Some(movie) => movies.push(movie),
                None => skipped.push(idx),
            }
        }
        DataFileStatus::Valid { movies, skipped }
    }
}

#[async_trait]
impl MovieStore for JsonFileStore {
    async fn load(&self) -> Vec<Movie> {
        match self.inspect().await {
            DataFileStatus::Missing => Vec::new(),
            DataFileStatus::Valid { movies, skipped } => {
                if !skipped.is_empty() {
                    tracing::warn!(
                        path = %self.path.display(),
                        ?skipped,
                        "ignoring data file records without an id"
                    );
                }
                movies
            }
            DataFileStatus::Corrupt(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "data file unreadable, treating watchlist as empty"
                );
                Vec::new()
            }
        }
    }

    /// Stages the collection in a uniquely named sibling file and renames it
    /// over the data file, so concurrent saves never share a temp file.
    async fn save(&self, movies: &[Movie]) -> anyhow::Result<()> {
        let dir = self.dir();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let bytes = serde_json::to_vec_pretty(movies)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let mut staged = tempfile::NamedTempFile::new_in(&dir)
                .with_context(|| format!("Failed to create a temp file in {}", dir.display()))?;
            staged
                .write_all(&bytes)
                .with_context(|| format!("Failed to write {}", staged.path().display()))?;
            staged
                .persist(&path)
                .with_context(|| format!("Failed to replace {}", path.display()))?;
            Ok(())
        })
        .await
        .context("Save task did not complete")??;
        Ok(())
    }
}
