// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain and collections
// - It is the only place that catches and reports errors
// - It never bypasses entity validation

pub mod demo;

pub use demo::{run, run_and_report, OutputFormat, Scenario};
