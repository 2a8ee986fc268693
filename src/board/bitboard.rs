//! Bitboard cell sets for fast membership tests

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64); // 4 words cover 225 cells

#[inline]
fn slot(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1u64 << (idx % 64))
}

/// A set of board cells backed by a fixed array of words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    pub fn insert(&mut self, pos: Pos) {
        let (word, mask) = slot(pos);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let (word, mask) = slot(pos);
        self.words[word] &= !mask;
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let (word, mask) = slot(pos);
        self.words[word] & mask != 0
    }

    /// Number of cells in the set
    #[inline]
    pub fn len(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == [0; WORDS]
    }

    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut words = self.words;
        for (w, o) in words.iter_mut().zip(other.words) {
            *w |= o;
        }
        Bitboard { words }
    }

    /// Iterate the cells in ascending index (row-major) order
    pub fn iter(&self) -> Cells {
        Cells {
            words: self.words,
            next_word: 0,
        }
    }
}

/// Iterator over the cells of a [`Bitboard`], lowest index first
pub struct Cells {
    words: [u64; WORDS],
    next_word: usize,
}

impl Iterator for Cells {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_word < WORDS {
            let word = &mut self.words[self.next_word];
            if *word == 0 {
                self.next_word += 1;
                continue;
            }
            let bit = word.trailing_zeros() as usize;
            *word &= *word - 1;
            let idx = self.next_word * 64 + bit;
            // Bits past the last cell are never set, but guard anyway
            if idx < TOTAL_CELLS {
                return Some(Pos::from_index(idx));
            }
        }
        None
    }
}

impl IntoIterator for Bitboard {
    type Item = Pos;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}
