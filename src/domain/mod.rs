// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod movie;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{validate_movie, Movie, EARLIEST_FILM_YEAR};

// Actor Domain
pub use actor::{validate_actor, Actor, Gender};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of field invariants on entities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field} must be a non-empty string.")]
    EmptyField { field: &'static str },

    #[error("Year must be a valid integer greater than or equal to {earliest}, got {year}.")]
    YearOutOfRange { year: i32, earliest: i32 },

    #[error("{field} must be a real calendar date in YYYY-MM-DD format, got {value:?}.")]
    InvalidDate { field: &'static str, value: String },

    #[error("Gender must be 'Male', 'Female', or 'Other', got {0:?}.")]
    InvalidGender(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
