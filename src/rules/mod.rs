//! Game rules
//!
//! The canonical win condition: a contiguous run of exactly five, with
//! overlines (six or more) explicitly not winning.

pub mod win;

pub use win::{is_winning_move, winning_line};
