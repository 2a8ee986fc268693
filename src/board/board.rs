//! Board structure

use super::bitboard::Bitboard;
use super::{Pos, Stone};

/// Game board: one bitboard per color.
///
/// The board is a plain value type. The AI core clones a snapshot and
/// mutates it in place during search (place/remove pairs), so `Clone`
/// and `PartialEq` are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stone at `pos`, or `Stone::Empty`
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        match (self.black.contains(pos), self.white.contains(pos)) {
            (true, _) => Stone::Black,
            (_, true) => Stone::White,
            _ => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.contains(pos) && !self.white.contains(pos)
    }

    /// Place a stone; placing `Stone::Empty` is a no-op
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.insert(pos),
            Stone::White => self.white.insert(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone (the undo half of a place/remove pair)
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.black.remove(pos);
        self.white.remove(pos);
    }

    /// All occupied cells as one set
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.len() + self.white.len()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Side whose turn it is, derived from the occupied-cell count.
    /// Black moves first, so an even count means Black to move.
    #[inline]
    pub fn side_to_move(&self) -> Stone {
        if self.stone_count() % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }
}
