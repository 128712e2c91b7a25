//! Summary statistics over the whole watchlist.

use crate::domain::movie::Movie;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Histogram key used for movies without a genre.
pub const UNKNOWN_GENRE: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub watched: usize,
    /// Mean of all present ratings, `null` when nothing is rated.
    pub avg_rating: Option<f64>,
    /// Most frequent genre, `null` for an empty watchlist.
    pub top_genre: Option<String>,
    #[schema(value_type = Object)]
    pub genre_counts: GenreCounts,
}

/// Genre histogram ordered by count, highest first. Genres with equal counts
/// keep the order in which they were first seen.
///
/// Serializes as a JSON object whose key order is the histogram order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreCounts(Vec<(String, usize)>);

impl GenreCounts {
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.0.iter().find(|(g, _)| g == genre).map(|(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(g, n)| (g.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for GenreCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (genre, count) in &self.0 {
            map.serialize_entry(genre, count)?;
        }
        map.end()
    }
}

pub fn compute_stats(movies: &[Movie]) -> Stats {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut watched = 0;
    let mut rating_sum = 0.0;
    let mut rated = 0usize;

    for movie in movies {
        if movie.watched {
            watched += 1;
        }
        if let Some(rating) = movie.rating {
            rating_sum += rating;
            rated += 1;
        }

        let genre = match movie.genre.trim() {
            "" => UNKNOWN_GENRE,
            g => g,
        };
        match slots.get(genre) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(genre.to_string(), counts.len());
                counts.push((genre.to_string(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Stats {
        total: movies.len(),
        watched,
        avg_rating: (rated > 0).then(|| rating_sum / rated as f64),
        top_genre: counts.first().map(|(g, _)| g.clone()),
        genre_counts: GenreCounts(counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genre: &str, rating: Option<f64>, watched: bool) -> Movie {
        Movie {
            id: format!("m_{}", genre),
            title: "t".to_string(),
            genre: genre.to_string(),
            year: 2000,
            rating,
            watched,
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.watched, 0);
        assert_eq!(stats.avg_rating, None);
        assert_eq!(stats.top_genre, None);
        assert!(stats.genre_counts.is_empty());

        let v = serde_json::to_value(&stats).unwrap();
        assert!(v["avgRating"].is_null());
        assert!(v["topGenre"].is_null());
        assert_eq!(v["genreCounts"], serde_json::json!({}));
    }

    #[test]
    fn test_genre_histogram_and_top_genre() {
        let movies = vec![
            movie("A", None, false),
            movie("A", None, false),
            movie("B", None, false),
        ];
        let stats = compute_stats(&movies);
        assert_eq!(stats.genre_counts.get("A"), Some(2));
        assert_eq!(stats.genre_counts.get("B"), Some(1));
        assert_eq!(stats.genre_counts.len(), 2);
        assert_eq!(stats.top_genre.as_deref(), Some("A"));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let movies = vec![
            movie("Drama", None, false),
            movie("Comedy", None, false),
            movie("Horror", None, false),
            movie("Horror", None, false),
            movie("Comedy", None, false),
            movie("Drama", None, false),
        ];
        let stats = compute_stats(&movies);
        let order: Vec<&str> = stats.genre_counts.iter().map(|(g, _)| g).collect();
        assert_eq!(order, vec!["Drama", "Comedy", "Horror"]);
        assert_eq!(stats.top_genre.as_deref(), Some("Drama"));

        let json = serde_json::to_string(&stats.genre_counts).unwrap();
        assert_eq!(json, r#"{"Drama":2,"Comedy":2,"Horror":2}"#);
    }

    #[test]
    fn test_blank_genre_counts_as_unknown() {
        let movies = vec![movie("  ", None, false), movie("", None, false), movie(" Noir ", None, false)];
        let stats = compute_stats(&movies);
        assert_eq!(stats.genre_counts.get(UNKNOWN_GENRE), Some(2));
        assert_eq!(stats.genre_counts.get("Noir"), Some(1));
        assert_eq!(stats.top_genre.as_deref(), Some(UNKNOWN_GENRE));
    }

    #[test]
    fn test_counts_and_average_rating() {
        let movies = vec![
            movie("A", Some(8.0), true),
            movie("B", None, true),
            movie("C", Some(5.0), false),
        ];
        let stats = compute_stats(&movies);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.watched, 2);
        assert_eq!(stats.avg_rating, Some(6.5));
    }
}
