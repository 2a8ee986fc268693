//! Heuristic evaluation of candidate cells
//!
//! Scores an empty cell for one side by extracting the four board lines
//! through it (row, column, both diagonals), classifying each against the
//! pattern catalog and summing the four scores. The additive model values
//! a cell that strengthens two axes above one that strengthens a single
//! axis, which approximates multi-threat danger without wider search.

use crate::board::{Board, Pos, Stone};

use super::patterns::{classify, LineCell};

/// Axis direction vectors (4 axes)
const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cells collected outward from the candidate in each direction
const REACH: i32 = 4;

/// Longest possible fragment: center plus REACH cells either way
const MAX_FRAGMENT: usize = 2 * REACH as usize + 1;

/// A line fragment around a candidate cell.
///
/// Transient: built per axis, classified, discarded.
struct Fragment {
    cells: [LineCell; MAX_FRAGMENT],
    len: usize,
}

impl Fragment {
    fn as_slice(&self) -> &[LineCell] {
        &self.cells[..self.len]
    }

    #[inline]
    fn push(&mut self, cell: LineCell) {
        self.cells[self.len] = cell;
        self.len += 1;
    }
}

/// Score a candidate cell for `side`, assuming `side` plays there.
///
/// The cell itself is counted as `side`'s mark; the board is not touched.
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, side: Stone) -> i32 {
    AXES.iter()
        .map(|&(dr, dc)| classify(extract_fragment(board, pos, dr, dc, side).as_slice()))
        .sum()
}

/// Extract the fragment along one axis through `pos`.
///
/// Walks up to REACH cells outward in both directions, stopping a
/// direction at the first opposing mark or the board edge. Cells past a
/// stop are omitted, not substituted, so the fragment never contains an
/// opposing mark and its length varies from 1 to MAX_FRAGMENT.
fn extract_fragment(board: &Board, pos: Pos, dr: i32, dc: i32, side: Stone) -> Fragment {
    let opponent = side.opponent();

    // Backward cells, collected nearest-first then emitted outermost-first
    let mut back = [LineCell::Empty; REACH as usize];
    let mut back_len = 0;
    for step in 1..=REACH {
        let Some(cell) = pos.offset(-dr * step, -dc * step) else {
            break;
        };
        let mark = board.get(cell);
        if mark == opponent {
            break;
        }
        back[back_len] = if mark == side { LineCell::Own } else { LineCell::Empty };
        back_len += 1;
    }

    let mut fragment = Fragment {
        cells: [LineCell::Empty; MAX_FRAGMENT],
        len: 0,
    };
    for i in (0..back_len).rev() {
        fragment.push(back[i]);
    }

    // The candidate cell counts as the evaluated side's mark
    fragment.push(LineCell::Own);

    for step in 1..=REACH {
        let Some(cell) = pos.offset(dr * step, dc * step) else {
            break;
        };
        let mark = board.get(cell);
        if mark == opponent {
            break;
        }
        fragment.push(if mark == side { LineCell::Own } else { LineCell::Empty });
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    /// An isolated candidate scores open-one on each of the 4 axes
    #[test]
    fn test_evaluate_lone_cell() {
        let board = Board::new();
        let score = evaluate(&board, Pos::new(7, 7), Stone::Black);
        assert_eq!(score, 4 * PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_evaluate_open_four_axis() {
        let mut board = Board::new();
        // Black mmm at (7,4)-(7,6); candidate (7,3) would make _mmmm_
        for col in 4..7 {
            board.place(Pos::new(7, col), Stone::Black);
        }

        // Row axis: open four. Other three axes: open one each.
        let score = evaluate(&board, Pos::new(7, 3), Stone::Black);
        assert_eq!(score, PatternScore::OPEN_FOUR + 3 * PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_evaluate_completing_five() {
        let mut board = Board::new();
        for col in 4..8 {
            board.place(Pos::new(7, col), Stone::Black);
        }

        // (7,8) completes five on the row axis
        let score = evaluate(&board, Pos::new(7, 8), Stone::Black);
        assert!(
            score >= PatternScore::FIVE,
            "completion cell should score the five class, got {score}"
        );
    }

    #[test]
    fn test_fragment_stops_at_opposing_mark() {
        let mut board = Board::new();
        // White wall right of the candidate; black run to the left
        board.place(Pos::new(7, 8), Stone::White);
        for col in 4..7 {
            board.place(Pos::new(7, col), Stone::Black);
        }

        // Row fragment for Black at (7,7): _ mmm m| -> "mmmm" flush right,
        // a closed four rather than an open one
        let score = evaluate(&board, Pos::new(7, 7), Stone::Black);
        assert_eq!(score, PatternScore::CLOSED_FOUR + 3 * PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_fragment_stops_at_edge() {
        let board = Board::new();
        // Corner cell: row and column fragments are 5 long, diagonal SE is
        // 5 long, diagonal SW is just the candidate
        let score = evaluate(&board, Pos::new(0, 0), Stone::Black);
        // Each 5-cell fragment m____ matches no 6-cell open-one shape and no
        // pair shape, so only closed-two-free axes contribute nothing
        assert_eq!(score, 0);
    }

    #[test]
    fn test_evaluate_two_axes_add() {
        let mut board = Board::new();
        // Black pairs on the row and the column through (7,7)
        board.place(Pos::new(7, 5), Stone::Black);
        board.place(Pos::new(7, 6), Stone::Black);
        board.place(Pos::new(5, 7), Stone::Black);
        board.place(Pos::new(6, 7), Stone::Black);

        let single_axis = {
            let mut b = Board::new();
            b.place(Pos::new(7, 5), Stone::Black);
            b.place(Pos::new(7, 6), Stone::Black);
            evaluate(&b, Pos::new(7, 7), Stone::Black)
        };
        let two_axes = evaluate(&board, Pos::new(7, 7), Stone::Black);
        assert!(
            two_axes > single_axis,
            "strengthening two axes must outscore one: {two_axes} vs {single_axis}"
        );
    }

    #[test]
    fn test_evaluate_does_not_mutate_board() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(8, 8), Stone::White);
        let snapshot = board;

        let _ = evaluate(&board, Pos::new(7, 8), Stone::Black);
        let _ = evaluate(&board, Pos::new(7, 8), Stone::White);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_evaluate_symmetric_for_either_side() {
        let mut black_board = Board::new();
        let mut white_board = Board::new();
        for col in 4..7 {
            black_board.place(Pos::new(7, col), Stone::Black);
            white_board.place(Pos::new(7, col), Stone::White);
        }

        assert_eq!(
            evaluate(&black_board, Pos::new(7, 7), Stone::Black),
            evaluate(&white_board, Pos::new(7, 7), Stone::White),
        );
    }
}
