// src/collections/mod.rs
//
// Collection layer
//
// RULES:
// - Each collection exclusively owns the entities stored in it
// - Validation lives on the entities, never here
// - Not-found and ambiguous outcomes are return values, not errors
// - No locking: mutation takes &mut self

pub mod actor_collection;
pub mod movie_collection;

pub use actor_collection::{ActorCollection, ActorRemoval};
pub use movie_collection::{MovieCollection, MovieQuery};
