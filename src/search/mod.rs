//! Search module
//!
//! Contains:
//! - Candidate generation (empty neighbors of occupied cells)
//! - Heuristic ranking (attack/defence scoring, top-3 pruning)
//! - Depth-limited minimax over the ranked candidates

pub mod minimax;

pub use minimax::{good_moves, minimax, ranked_moves, Move, BLOCK_THRESHOLD, WIN_THRESHOLD};
