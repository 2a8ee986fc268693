//! Candidate generation, heuristic ranking and minimax search
//!
//! The search tree is pruned hard: at every ply only the top 3 candidates
//! by combined attack/defence score are expanded. The ranker is trusted to
//! capture all locally relevant replies, trading breadth for depth.

use crate::board::{Bitboard, Board, Pos, Stone, CENTER};
use crate::eval::evaluate;

/// A ranked score above this completes five-in-a-row outright
pub const WIN_THRESHOLD: i32 = 20_000;

/// A ranked score above this (and below WIN_THRESHOLD) blocks the
/// opponent's five-completing cell
pub const BLOCK_THRESHOLD: i32 = 10_000;

/// Candidates kept per ply
const BRANCH_LIMIT: usize = 3;

/// Attack multiplier: when one cell both extends our combination and
/// blocks the same combination for the opponent, prefer extending
const ATTACK_WEIGHT: i32 = 2;

/// A candidate move with its ranking score.
///
/// Equality and hashing use the position only, so candidate sets
/// de-duplicate correctly across ranking passes with differing scores.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub pos: Pos,
    pub score: i32,
}

impl Move {
    #[inline]
    fn at(pos: Pos) -> Self {
        Self { pos, score: 0 }
    }

    /// Playing this move completes an immediate five
    #[inline]
    pub fn wins_outright(&self) -> bool {
        self.score > WIN_THRESHOLD
    }

    /// Playing this move blocks the opponent's immediate five
    #[inline]
    pub fn blocks_loss(&self) -> bool {
        self.score > BLOCK_THRESHOLD && self.score < WIN_THRESHOLD
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Move {}

impl std::hash::Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

/// Enumerate candidate cells: empty 8-neighbors of occupied cells,
/// de-duplicated, in stable row-major first-found order.
///
/// Second-move special case: with exactly one stone on the board the set
/// collapses to the single neighbor closest to the center (Euclidean
/// distance, strict comparison so ties keep the first found).
pub fn good_moves(board: &Board) -> Vec<Move> {
    let mut seen = Bitboard::new();
    let mut moves = Vec::new();

    for pos in board.occupied() {
        for dr in -1..=1 {
            for dc in -1..=1 {
                let Some(neighbor) = pos.offset(dr, dc) else {
                    continue;
                };
                if board.is_empty(neighbor) && !seen.contains(neighbor) {
                    seen.insert(neighbor);
                    moves.push(Move::at(neighbor));
                }
            }
        }
    }

    if board.stone_count() == 1 {
        let mut best = moves[0];
        let mut min_distance_sq = i32::MAX;
        for &m in &moves {
            let d = m.pos.distance_sq(CENTER);
            if d < min_distance_sq {
                min_distance_sq = d;
                best = m;
            }
        }
        return vec![best];
    }

    moves
}

/// Rank candidates for `side` and keep the best 3.
///
/// attack = 2 x own evaluation, defence = opponent evaluation at the same
/// cell; total = attack + defence. A single candidate is returned unscored.
pub fn ranked_moves(board: &Board, side: Stone) -> Vec<Move> {
    let mut moves = good_moves(board);
    if moves.len() == 1 {
        return moves;
    }

    let opponent = side.opponent();
    for m in &mut moves {
        let attack = ATTACK_WEIGHT * evaluate(board, m.pos, side);
        let defence = evaluate(board, m.pos, opponent);
        m.score = attack + defence;
    }

    // Stable sort keeps first-found order among equal scores
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves.truncate(BRANCH_LIMIT);
    moves
}

/// Depth-limited minimax over the ranked candidates.
///
/// `board` is mutated in place around each simulated move and restored
/// before returning; `my_side` is threaded through explicitly so every
/// frame signs its score against the side the search is run for.
///
/// Two scoring modes: with `win_loss_depth` false a terminal node returns
/// the top candidate's heuristic score, signed positive for `my_side`;
/// with it true the node returns the remaining depth instead, so a larger
/// positive value means a faster forced win and a larger negative value a
/// longer-delayed loss. An empty candidate set is a drawn continuation
/// worth 0 in either mode.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    side: Stone,
    my_side: Stone,
    win_loss_depth: bool,
) -> i32 {
    let moves = ranked_moves(board, side);

    let Some(top) = moves.first() else {
        return 0; // full board: draw, not a fault
    };

    if top.wins_outright() || depth == 0 {
        let value = if win_loss_depth { depth as i32 } else { top.score };
        return if side == my_side { value } else { -value };
    }

    let opponent = side.opponent();
    if side == my_side {
        let mut max_predicted = i32::MIN;
        for m in &moves {
            board.place(m.pos, side);
            let predicted = minimax(board, depth - 1, opponent, my_side, win_loss_depth);
            board.remove(m.pos);
            max_predicted = max_predicted.max(predicted);
        }
        max_predicted
    } else {
        let mut min_predicted = i32::MAX;
        for m in &moves {
            board.place(m.pos, side);
            let predicted = minimax(board, depth - 1, opponent, my_side, win_loss_depth);
            board.remove(m.pos);
            min_predicted = min_predicted.min(predicted);
        }
        min_predicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;
    use std::collections::HashSet;

    /// De-duplicated candidate positions as a set
    fn candidate_set(board: &Board) -> HashSet<Pos> {
        good_moves(board).into_iter().map(|m| m.pos).collect()
    }

    #[test]
    fn test_good_moves_neighbors_only() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(7, 8), Stone::White);

        let set = candidate_set(&board);
        // Adjacent empty cells are in
        assert!(set.contains(&Pos::new(6, 6)));
        assert!(set.contains(&Pos::new(8, 9)));
        assert!(set.contains(&Pos::new(6, 8)));
        // Occupied cells are not
        assert!(!set.contains(&Pos::new(7, 7)));
        assert!(!set.contains(&Pos::new(7, 8)));
        // Cells with no occupied 8-neighbor are not
        assert!(!set.contains(&Pos::new(0, 0)));
        assert!(!set.contains(&Pos::new(7, 10)));
    }

    #[test]
    fn test_good_moves_deduplicates() {
        let mut board = Board::new();
        // Two stones sharing neighbors
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(7, 9), Stone::White);

        let moves = good_moves(&board);
        let set = candidate_set(&board);
        assert_eq!(moves.len(), set.len(), "candidates must be de-duplicated");
        // (7,8) neighbors both stones but appears once
        assert!(set.contains(&Pos::new(7, 8)));
    }

    #[test]
    fn test_good_moves_second_move_collapses_to_center_side() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Stone::Black);

        let moves = good_moves(&board);
        assert_eq!(moves.len(), 1, "second move must collapse to one candidate");
        assert_eq!(moves[0].pos, Pos::new(1, 1));
    }

    #[test]
    fn test_good_moves_second_move_near_center_ties_first_found() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);

        let moves = good_moves(&board);
        assert_eq!(moves.len(), 1);
        // Orthogonal neighbors are strictly closer than diagonal ones;
        // among the four at distance 1 the first found in row-major
        // order wins
        assert_eq!(moves[0].pos, Pos::new(6, 7));
    }

    #[test]
    fn test_good_moves_empty_board() {
        let board = Board::new();
        assert!(good_moves(&board).is_empty());
    }

    #[test]
    fn test_ranked_moves_top_three() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(8, 8), Stone::White);
        board.place(Pos::new(7, 8), Stone::Black);

        let ranked = ranked_moves(&board, Stone::White);
        assert!(ranked.len() <= 3);
        assert!(ranked.len() > 1);
        // Descending by score
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ranked_completion_cell_is_winning() {
        let mut board = Board::new();
        for col in 4..8 {
            board.place(Pos::new(7, col), Stone::Black);
        }

        let ranked = ranked_moves(&board, Stone::Black);
        let top = ranked[0];
        assert!(
            top.wins_outright(),
            "completing an open four must rank above the win threshold, got {}",
            top.score
        );
        assert!(top.pos == Pos::new(7, 3) || top.pos == Pos::new(7, 8));
    }

    #[test]
    fn test_ranked_blocking_cell_in_block_band() {
        let mut board = Board::new();
        // White one move from five; Black far away with no win of its own
        for col in 4..8 {
            board.place(Pos::new(7, col), Stone::White);
        }
        board.place(Pos::new(0, 0), Stone::Black);
        board.place(Pos::new(0, 2), Stone::Black);

        let ranked = ranked_moves(&board, Stone::Black);
        let top = ranked[0];
        assert!(
            top.blocks_loss(),
            "blocking cell must score in (10000, 20000), got {}",
            top.score
        );
        assert!(top.pos == Pos::new(7, 3) || top.pos == Pos::new(7, 8));
    }

    #[test]
    fn test_move_identity_ignores_score() {
        let a = Move { pos: Pos::new(3, 4), score: 10 };
        let b = Move { pos: Pos::new(3, 4), score: -99 };
        let c = Move { pos: Pos::new(4, 3), score: 10 };
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Move> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_minimax_full_board_is_draw() {
        let mut board = Board::new();
        for idx in 0..(BOARD_SIZE * BOARD_SIZE) {
            board.place(Pos::from_index(idx), Stone::Black);
        }

        // No candidates anywhere: drawn terminal, score 0 in both modes
        assert_eq!(minimax(&mut board, 3, Stone::White, Stone::White, false), 0);
        assert_eq!(minimax(&mut board, 3, Stone::White, Stone::White, true), 0);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(8, 7), Stone::White);
        board.place(Pos::new(7, 8), Stone::Black);
        let snapshot = board;

        let _ = minimax(&mut board, 3, Stone::White, Stone::White, false);
        assert_eq!(board, snapshot, "search must leave no net mutation");
    }

    #[test]
    fn test_minimax_sign_follows_side() {
        let mut board = Board::new();
        // Black completes five immediately: terminal at the first frame
        for col in 4..8 {
            board.place(Pos::new(7, col), Stone::Black);
        }
        board.place(Pos::new(0, 0), Stone::White);

        let as_my_side = minimax(&mut board, 5, Stone::Black, Stone::Black, false);
        assert!(as_my_side > WIN_THRESHOLD);

        let as_opponent = minimax(&mut board, 5, Stone::Black, Stone::White, false);
        assert!(as_opponent < -WIN_THRESHOLD);
    }

    #[test]
    fn test_minimax_win_loss_depth_prefers_faster_win() {
        let mut board = Board::new();
        for col in 4..8 {
            board.place(Pos::new(7, col), Stone::Black);
        }
        board.place(Pos::new(0, 0), Stone::White);

        // Immediate win at full remaining depth scores higher than the
        // same win found deeper in the tree
        let shallow = minimax(&mut board, 6, Stone::Black, Stone::Black, true);
        assert_eq!(shallow, 6, "win at the root keeps all remaining depth");
    }
}
