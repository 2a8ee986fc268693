//! Game state keeper
//!
//! Owns the authoritative board and enforces the rules the AI core assumes
//! as preconditions: moves land on empty cells, nothing is played after a
//! winner exists, the current player alternates, and wins are detected by
//! the exact-five rule. The AI only ever sees snapshots of the board.

use thiserror::Error;
use tracing::info;

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::rules::winning_line;

/// Rejected moves
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("cell ({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Pos),
}

/// One played game of Gomoku
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Stone,
    move_counter: u32,
    winner: Option<Stone>,
    winning_line: Option<[Pos; 5]>,
    history: Vec<(Pos, Stone)>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            move_counter: 1,
            winner: None,
            winning_line: None,
            history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read-only view of the board; the AI clones its own snapshot
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Number of the move about to be played (starts at 1)
    #[inline]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// The five winning cells, once a winner exists
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw()
    }

    /// Full board without a winner
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.board.stone_count() as usize == TOTAL_CELLS
    }

    /// Validate and play a move for the current player.
    ///
    /// On success the winner is updated and the turn passes to the other
    /// side; the move counter keeps advancing past a win so parity stays
    /// consistent for replays.
    pub fn play(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let side = self.current_player;
        self.board.place(pos, side);
        self.history.push((pos, side));

        if let Some(line) = winning_line(&self.board, pos, side) {
            self.winner = Some(side);
            self.winning_line = Some(line);
            info!(?side, row = pos.row, col = pos.col, "game won");
        }

        self.move_counter += 1;
        self.current_player = side.opponent();
        Ok(())
    }

    /// Take back the last move, if any.
    ///
    /// A win can only arise from the move that completed it, so undoing
    /// the last move always clears the winner.
    pub fn undo(&mut self) {
        let Some((pos, side)) = self.history.pop() else {
            return;
        };
        self.board.remove(pos);
        self.move_counter -= 1;
        self.current_player = side;
        self.winner = None;
        self.winning_line = None;
    }
}
