pub mod entity;
pub mod invariants;

pub use entity::Movie;
pub use invariants::{validate_movie, EARLIEST_FILM_YEAR};
