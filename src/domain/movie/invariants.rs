use super::entity::Movie;
use crate::domain::validation::{require_calendar_date, require_non_empty};
use crate::domain::{DomainError, DomainResult};

/// The first film was made in 1888
pub const EARLIEST_FILM_YEAR: i32 = 1888;

/// Validates all Movie invariants
/// These are the absolute rules that must hold for a Movie to be valid
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(movie.title())?;
    validate_year(movie.year())?;
    validate_genre(movie.genre())?;
    validate_release_date(movie.release_date())?;
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> DomainResult<()> {
    require_non_empty("Title", title)
}

pub(crate) fn validate_year(year: i32) -> DomainResult<()> {
    if year < EARLIEST_FILM_YEAR {
        return Err(DomainError::YearOutOfRange {
            year,
            earliest: EARLIEST_FILM_YEAR,
        });
    }
    Ok(())
}

pub(crate) fn validate_genre(genre: &str) -> DomainResult<()> {
    require_non_empty("Genre", genre)
}

pub(crate) fn validate_release_date(release_date: &str) -> DomainResult<()> {
    require_calendar_date("Release date", release_date)
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Identity (UUID) is assigned at construction and never changes
/// 2. Title and genre cannot be empty
/// 3. Year is at least EARLIEST_FILM_YEAR
/// 4. Release date is a real calendar date written as YYYY-MM-DD
/// 5. A failed setter leaves every field as it was

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::new("007", 1962, "Action", "1962-10-05").unwrap();
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_year_boundary() {
        assert!(validate_year(EARLIEST_FILM_YEAR).is_ok());
        assert!(validate_year(EARLIEST_FILM_YEAR - 1).is_err());
        assert!(validate_year(-1962).is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = validate_genre("").unwrap_err();
        assert_eq!(err.to_string(), "Genre must be a non-empty string.");

        let err = validate_release_date("1962-02-30").unwrap_err();
        assert!(err.to_string().starts_with("Release date must be"));
    }
}
