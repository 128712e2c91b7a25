//! Movie records and the request payloads they are built from.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

pub mod input;
pub mod validate;

pub use input::{MovieInput, NumericField};
pub use validate::{validate_movie, ValidationError};

/// A single watchlist entry, exactly as persisted and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Opaque id assigned at creation (`m_<unix seconds>_<6 hex chars>`).
    pub id: String,
    pub title: String,
    pub genre: String,
    pub year: i64,
    /// `null` when the movie has not been rated.
    pub rating: Option<f64>,
    #[serde(default)]
    pub watched: bool,
}

impl Movie {
    /// Builds a normalized record from an input that already passed
    /// [`validate_movie`] with all fields required.
    pub fn from_input(id: String, input: &MovieInput) -> Self {
        Self {
            id,
            title: input.title.clone(),
            genre: input.genre.clone(),
            year: input.year.as_number().map(|y| y.trunc() as i64).unwrap_or_default(),
            rating: input.rating.as_number(),
            watched: input.watched,
        }
    }

    /// Reads one record of the data file. Loosely typed fields (`1999.0`,
    /// `"8"`, `1`) are cast the way request bodies are; a record without a
    /// string id is unusable and yields `None`.
    pub fn from_stored(record: &JsonValue) -> Option<Self> {
        let id = match record.get("id")? {
            JsonValue::String(id) if !id.trim().is_empty() => id.clone(),
            _ => return None,
        };
        Some(Self::from_input(id, &MovieInput::from_json(record)))
    }
}

/// Generates a fresh movie id. Callers check it against the collection.
pub fn new_movie_id() -> String {
    let suffix: [u8; 3] = rand::thread_rng().gen();
    let hex: String = suffix.iter().map(|b| format!("{:02x}", b)).collect();
    format!("m_{}_{}", Utc::now().timestamp(), hex)
}

/// Generates an id not already used by any movie in `existing`.
pub fn unique_movie_id(existing: &[Movie]) -> String {
    unique_movie_id_from(existing, new_movie_id)
}

/// Draws ids from `next_id` until one is free.
pub fn unique_movie_id_from(existing: &[Movie], mut next_id: impl FnMut() -> String) -> String {
    loop {
        let id = next_id();
        if !existing.iter().any(|m| m.id == id) {
            return id;
        }
    }
}
