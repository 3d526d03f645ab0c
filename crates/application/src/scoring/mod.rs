//! Scoring module - combined performance scores
//!
//! This module blends per-strategy metrics into a single score and selects the
//! best performer of a comparison.

mod engine;
mod weights;

pub use engine::*;
pub use weights::*;
