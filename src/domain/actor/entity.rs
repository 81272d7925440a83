use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::invariants::{validate_date_of_birth, validate_first_name, validate_surname};
use crate::domain::{DomainError, DomainResult};

/// A performer in the catalog
/// Actors carry no identifier; lookups go through first name and surname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActorRecord")]
pub struct Actor {
    first_name: String,

    surname: String,

    gender: Gender,

    /// Date of birth as `YYYY-MM-DD`
    date_of_birth: String,
}

/// Fixed set of genders an actor may be recorded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Unvalidated shape accepted from serialized input
#[derive(Debug, Deserialize)]
struct ActorRecord {
    first_name: String,
    surname: String,
    gender: String,
    date_of_birth: String,
}

impl Actor {
    /// Create a new Actor
    /// Every field is validated before the actor exists
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        gender: Gender,
        date_of_birth: impl Into<String>,
    ) -> DomainResult<Self> {
        let first_name = first_name.into();
        let surname = surname.into();
        let date_of_birth = date_of_birth.into();

        validate_first_name(&first_name)?;
        validate_surname(&surname)?;
        validate_date_of_birth(&date_of_birth)?;

        Ok(Self {
            first_name,
            surname,
            gender,
            date_of_birth,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> DomainResult<()> {
        let first_name = first_name.into();
        validate_first_name(&first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) -> DomainResult<()> {
        let surname = surname.into();
        validate_surname(&surname)?;
        self.surname = surname;
        Ok(())
    }

    /// Gender is closed over its variants, so there is nothing left to check
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn set_date_of_birth(&mut self, date_of_birth: impl Into<String>) -> DomainResult<()> {
        let date_of_birth = date_of_birth.into();
        validate_date_of_birth(&date_of_birth)?;
        self.date_of_birth = date_of_birth;
        Ok(())
    }
}

impl TryFrom<ActorRecord> for Actor {
    type Error = DomainError;

    fn try_from(record: ActorRecord) -> DomainResult<Self> {
        let gender = record.gender.parse()?;
        Self::new(record.first_name, record.surname, gender, record.date_of_birth)
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    /// Case-sensitive: only the exact variant names are accepted
    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "First Name: {}, Surname: {}, Gender: {}, Date of Birth: {}",
            self.first_name, self.surname, self.gender, self.date_of_birth
        )
    }
}
