//! Gomoku engine with heuristic-pruned minimax search
//!
//! Plays five-in-a-row on a 15x15 board. The move-selection core ranks
//! candidate cells with a pattern-based heuristic and searches only the
//! top few with a depth-limited minimax, switching to plies-to-outcome
//! scoring once the game matures.
//!
//! # Architecture
//!
//! - [`board`]: 15x15 board with bitboard cell sets
//! - [`rules`]: the exact-five win condition
//! - [`eval`]: pattern catalog and per-cell heuristic evaluation
//! - [`search`]: candidate generation, ranking and minimax
//! - [`engine`]: top-level move selection with short-circuit rules
//! - [`game`]: authoritative game state (turns, validation, winner)
//! - [`ui`]: eframe/egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AiPlayer, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black);
//!
//! // White replies
//! let player = AiPlayer::new();
//! let pos = player.select_move(&board);
//! board.place(pos, Stone::White);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
pub use engine::{AiPlayer, MoveChoice, Resolution, SearchConfig};
pub use game::{Game, MoveError};
