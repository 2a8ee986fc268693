//! Win condition checking
//!
//! A move wins iff it makes a contiguous run of exactly five: an overline
//! (six or more in a row) is not a win.

use crate::board::{Board, Pos, Stone};

/// Axis direction vectors (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the move just played at `pos` wins for `side`, returning
/// the five winning cells for highlighting.
///
/// Only the runs through `pos` can have changed, so only those are
/// examined. A run longer than five on an axis does not win on that axis.
pub fn winning_line(board: &Board, pos: Pos, side: Stone) -> Option<[Pos; 5]> {
    for &(dr, dc) in &DIRECTIONS {
        // Walk backward to the start of the run
        let mut start = pos;
        let mut len = 1;
        while let Some(prev) = start.offset(-dr, -dc) {
            if board.get(prev) != side {
                break;
            }
            start = prev;
            len += 1;
        }

        // Extend forward
        let mut end = pos;
        while let Some(next) = end.offset(dr, dc) {
            if board.get(next) != side {
                break;
            }
            end = next;
            len += 1;
        }

        if len == 5 {
            let mut line = [start; 5];
            let mut cell = start;
            for slot in line.iter_mut().skip(1) {
                // Four in-bounds steps exist because the run has length 5
                match cell.offset(dr, dc) {
                    Some(next) => {
                        *slot = next;
                        cell = next;
                    }
                    None => return None,
                }
            }
            return Some(line);
        }
    }

    None
}

/// Convenience predicate over `winning_line`
pub fn is_winning_move(board: &Board, pos: Pos, side: Stone) -> bool {
    winning_line(board, pos, side).is_some()
}
