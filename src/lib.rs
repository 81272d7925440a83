// src/lib.rs
// MovieCatalog - In-memory catalog of movies and actors
//
// Architecture:
// - Domain-centric: entities validate themselves on construction and on every setter
// - Collections own entities and never re-check them
// - Explicit: not-found and ambiguity are values, validation failures are errors
// - Application layer: the only place errors are caught and reported

pub mod application;
pub mod collections;
pub mod domain;
pub mod error;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_actor,
    validate_movie,
    // Actor
    Actor,
    DomainError,
    DomainResult,
    Gender,
    // Movie
    Movie,
    EARLIEST_FILM_YEAR,
};

// ============================================================================
// PUBLIC API - Collections
// ============================================================================

pub use collections::{ActorCollection, ActorRemoval, MovieCollection, MovieQuery};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};
