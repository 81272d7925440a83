use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::{validate_genre, validate_release_date, validate_title, validate_year};
use crate::domain::{DomainError, DomainResult};

/// A film in the catalog
/// Fields are private so every change goes through a validating setter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MovieRecord")]
pub struct Movie {
    /// Internal immutable identifier
    id: Uuid,

    title: String,

    /// Year of release, never earlier than the first film ever made
    year: i32,

    genre: String,

    /// Release date as `YYYY-MM-DD`
    release_date: String,
}

/// Unvalidated shape accepted from serialized input
#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    title: String,
    year: i32,
    genre: String,
    release_date: String,
}

impl Movie {
    /// Create a new Movie
    /// This is the only way to construct a valid Movie; a fresh id is assigned
    pub fn new(
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        release_date: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_id(Uuid::new_v4(), title.into(), year, genre.into(), release_date.into())
    }

    fn with_id(
        id: Uuid,
        title: String,
        year: i32,
        genre: String,
        release_date: String,
    ) -> DomainResult<Self> {
        validate_title(&title)?;
        validate_year(year)?;
        validate_genre(&genre)?;
        validate_release_date(&release_date)?;

        Ok(Self {
            id,
            title,
            year,
            genre,
            release_date,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> DomainResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) -> DomainResult<()> {
        validate_year(year)?;
        self.year = year;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) -> DomainResult<()> {
        let genre = genre.into();
        validate_genre(&genre)?;
        self.genre = genre;
        Ok(())
    }

    pub fn set_release_date(&mut self, release_date: impl Into<String>) -> DomainResult<()> {
        let release_date = release_date.into();
        validate_release_date(&release_date)?;
        self.release_date = release_date;
        Ok(())
    }
}

impl TryFrom<MovieRecord> for Movie {
    type Error = DomainError;

    fn try_from(record: MovieRecord) -> DomainResult<Self> {
        Self::with_id(
            record.id,
            record.title,
            record.year,
            record.genre,
            record.release_date,
        )
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Year: {}, Genre: {}, Release Date: {}",
            self.id, self.title, self.year, self.genre, self.release_date
        )
    }
}
