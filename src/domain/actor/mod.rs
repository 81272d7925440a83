pub mod entity;
pub mod invariants;

pub use entity::{Actor, Gender};
pub use invariants::validate_actor;
