//! Position evaluation for the move ranker
//!
//! Contains:
//! - Pattern catalog: fixed line-fragment shapes and their scores
//! - Heuristic: per-cell evaluation summing the 4 axis classifications

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{classify, LineCell, PatternScore};
