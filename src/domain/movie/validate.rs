//! Field rules for movie payloads. Checks run in a fixed order and the first
//! failure is reported.

use super::{MovieInput, NumericField};

pub const MIN_YEAR: i64 = 1888;
pub const MAX_TITLE_LEN: usize = 80;
pub const MAX_GENRE_LEN: usize = 40;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,
    #[error("Genre is required.")]
    GenreRequired,
    #[error("Year must be a number.")]
    YearNotNumber,
    #[error("Title is too long (max 80).")]
    TitleTooLong,
    #[error("Genre is too long (max 40).")]
    GenreTooLong,
    #[error("Year must be between 1888 and {max_year}.")]
    YearOutOfRange { max_year: i64 },
    #[error("Rating must be a number.")]
    RatingNotNumber,
    #[error("Rating must be between 1 and 10.")]
    RatingOutOfRange,
}

/// Validates `input`. `current_year` bounds the year from above (`current_year + 1`).
pub fn validate_movie(
    input: &MovieInput,
    require_all_fields: bool,
    current_year: i32,
) -> Result<(), ValidationError> {
    if require_all_fields {
        if input.title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if input.genre.is_empty() {
            return Err(ValidationError::GenreRequired);
        }
        if input.year.as_number().is_none() {
            return Err(ValidationError::YearNotNumber);
        }
    }

    if !input.title.is_empty() && input.title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    if !input.genre.is_empty() && input.genre.chars().count() > MAX_GENRE_LEN {
        return Err(ValidationError::GenreTooLong);
    }

    if !input.year.is_absent() {
        let year = input
            .year
            .as_number()
            .ok_or(ValidationError::YearNotNumber)?
            .trunc() as i64;
        let max_year = i64::from(current_year) + 1;
        if !(MIN_YEAR..=max_year).contains(&year) {
            return Err(ValidationError::YearOutOfRange { max_year });
        }
    }

    // A blank rating means "not rated".
    if !input.rating.is_absent() && input.rating != NumericField::Blank {
        let rating = input
            .rating
            .as_number()
            .ok_or(ValidationError::RatingNotNumber)?;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as JsonValue};

    const YEAR: i32 = 2026;

    fn check(body: JsonValue) -> Result<(), ValidationError> {
        validate_movie(&MovieInput::from_json(&body), true, YEAR)
    }

    fn valid() -> JsonValue {
        json!({ "title": "Arrival", "genre": "Sci-Fi", "year": 2016, "rating": 8.5, "watched": true })
    }

    fn with(field: &str, value: JsonValue) -> JsonValue {
        let mut body = valid();
        body[field] = value;
        body
    }

    #[test]
    fn test_valid_payload_passes() {
        assert_eq!(check(valid()), Ok(()));
    }

    #[test]
    fn test_required_fields_in_order() {
        assert_eq!(check(json!({})), Err(ValidationError::TitleRequired));
        assert_eq!(
            check(json!({ "title": "X" })),
            Err(ValidationError::GenreRequired)
        );
        assert_eq!(
            check(json!({ "title": "X", "genre": "Y" })),
            Err(ValidationError::YearNotNumber)
        );
        assert_eq!(check(with("title", json!("   "))), Err(ValidationError::TitleRequired));
        assert_eq!(check(with("year", json!("soon"))), Err(ValidationError::YearNotNumber));
    }

    #[test]
    fn test_required_checks_run_before_length_checks() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            check(json!({ "title": &long, "year": 2000 })),
            Err(ValidationError::GenreRequired)
        );
        assert_eq!(
            check(json!({ "title": &long, "genre": "x".repeat(41) })),
            Err(ValidationError::YearNotNumber)
        );
        assert_eq!(
            check(json!({ "title": &long, "genre": "x".repeat(41), "year": 1 })),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_length_limits_count_characters() {
        assert_eq!(check(with("title", json!("é".repeat(80)))), Ok(()));
        assert_eq!(
            check(with("title", json!("é".repeat(81)))),
            Err(ValidationError::TitleTooLong)
        );
        assert_eq!(check(with("genre", json!("g".repeat(40)))), Ok(()));
        assert_eq!(
            check(with("genre", json!("g".repeat(41)))),
            Err(ValidationError::GenreTooLong)
        );
    }

    #[test]
    fn test_year_boundaries() {
        let out_of_range = Err(ValidationError::YearOutOfRange { max_year: 2027 });
        assert_eq!(check(with("year", json!(1887))), out_of_range);
        assert_eq!(check(with("year", json!(1888))), Ok(()));
        assert_eq!(check(with("year", json!(2027))), Ok(()));
        assert_eq!(check(with("year", json!(2028))), out_of_range);
        assert_eq!(check(with("year", json!("2027.9"))), Ok(()));
    }

    #[test]
    fn test_year_range_message_names_bound() {
        let err = check(with("year", json!(1800))).unwrap_err();
        assert_eq!(err.to_string(), "Year must be between 1888 and 2027.");
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(check(with("rating", json!(0.9))), Err(ValidationError::RatingOutOfRange));
        assert_eq!(check(with("rating", json!(1))), Ok(()));
        assert_eq!(check(with("rating", json!(10))), Ok(()));
        assert_eq!(check(with("rating", json!(10.1))), Err(ValidationError::RatingOutOfRange));
        assert_eq!(check(with("rating", json!("7"))), Ok(()));
        assert_eq!(check(with("rating", json!("great"))), Err(ValidationError::RatingNotNumber));
    }

    #[test]
    fn test_missing_or_blank_rating_is_valid() {
        assert_eq!(check(with("rating", json!(""))), Ok(()));
        assert_eq!(check(with("rating", json!(null))), Ok(()));
        let mut body = valid();
        body.as_object_mut().unwrap().remove("rating");
        assert_eq!(check(body), Ok(()));
    }

    #[test]
    fn test_optional_mode_skips_required_checks() {
        let input = MovieInput::from_json(&json!({ "rating": 5 }));
        assert_eq!(validate_movie(&input, false, YEAR), Ok(()));
        let input = MovieInput::from_json(&json!({ "year": "" }));
        assert_eq!(
            validate_movie(&input, false, YEAR),
            Err(ValidationError::YearNotNumber)
        );
    }
}
