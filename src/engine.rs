//! Top-level move selection
//!
//! Combines the ranker and the minimax search into a single move request.
//! Most positions are settled without search: the opening goes to the
//! center, a lone candidate or a decisive ranked score (immediate win,
//! forced block) is returned as-is, and move 3 trusts the heuristic
//! because search picks the same cell there. Only the remaining positions
//! run minimax, rooted one ply into the opponent's reply for each of the
//! ranked candidates.

use std::time::Instant;

use tracing::{debug, trace};

use crate::board::{Board, Pos, CENTER};
use crate::search::{minimax, ranked_moves};

/// Which rule settled a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// First move of the game: the board center, unconditionally
    CenterOpening,
    /// Exactly one candidate existed
    ForcedReply,
    /// Move 3: search and heuristic agree, search skipped
    EarlyHeuristic,
    /// Top ranked score exceeds the win threshold
    ImmediateWin,
    /// Top ranked score falls in the forced-block band
    Block,
    /// Full minimax comparison over the ranked candidates
    Minimax,
}

/// A selected move with diagnostics
#[derive(Debug, Clone, Copy)]
pub struct MoveChoice {
    pub pos: Pos,
    /// Ranked heuristic score of the chosen cell (0 when unscored)
    pub score: i32,
    pub resolution: Resolution,
    pub time_ms: u64,
}

/// Search tuning
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Minimax depth in plies for the early/midgame phase
    pub depth: u32,
    /// Move number from which win/loss-depth scoring replaces heuristic
    /// comparison
    pub endgame_threshold: u32,
    /// Extra plies searched in the endgame phase, where fewer branches
    /// remain live
    pub endgame_depth_bonus: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 7,
            endgame_threshold: 20,
            endgame_depth_bonus: 1,
        }
    }
}

/// The automated player.
///
/// Stateless between calls: every request re-derives the side to move
/// from board parity and works on a private snapshot, so the same board
/// always produces the same move.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer {
    config: SearchConfig,
}

impl AiPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Pick a move for whichever side is to move on `board`.
    ///
    /// Convenience wrapper over [`AiPlayer::choose`].
    #[must_use]
    pub fn select_move(&self, board: &Board) -> Pos {
        self.choose(board).pos
    }

    /// Pick a move and report how it was decided.
    ///
    /// The input board is cloned into a scratch buffer; the caller's copy
    /// is never mutated.
    #[must_use]
    pub fn choose(&self, board: &Board) -> MoveChoice {
        let start = Instant::now();
        let mut scratch = *board;

        let move_number = scratch.stone_count() + 1;
        let my_side = scratch.side_to_move();

        if move_number == 1 {
            return self.finish(CENTER, 0, Resolution::CenterOpening, start);
        }

        let ranked = ranked_moves(&scratch, my_side);
        let Some(&top) = ranked.first() else {
            // Full board; the caller's contract rules this out in a live game
            return self.finish(CENTER, 0, Resolution::ForcedReply, start);
        };

        if move_number == 3 {
            return self.finish(top.pos, top.score, Resolution::EarlyHeuristic, start);
        }
        if ranked.len() == 1 {
            return self.finish(top.pos, top.score, Resolution::ForcedReply, start);
        }
        if top.wins_outright() {
            return self.finish(top.pos, top.score, Resolution::ImmediateWin, start);
        }
        if top.blocks_loss() {
            return self.finish(top.pos, top.score, Resolution::Block, start);
        }

        // Heuristic comparison is unreliable once a forced outcome is
        // near: past the threshold, compare plies-to-outcome instead and
        // search one ply deeper since fewer branches remain live
        let endgame = move_number >= self.config.endgame_threshold;
        let depth = if endgame {
            self.config.depth + self.config.endgame_depth_bonus
        } else {
            self.config.depth
        };

        let opponent = my_side.opponent();
        let mut best = top;
        let mut max_predicted = i32::MIN;
        for m in &ranked {
            scratch.place(m.pos, my_side);
            let predicted = minimax(&mut scratch, depth, opponent, my_side, endgame);
            scratch.remove(m.pos);
            trace!(
                row = m.pos.row,
                col = m.pos.col,
                heuristic = m.score,
                predicted,
                "candidate evaluated"
            );
            if predicted > max_predicted {
                max_predicted = predicted;
                best = *m;
            }
        }

        self.finish(best.pos, best.score, Resolution::Minimax, start)
    }

    fn finish(&self, pos: Pos, score: i32, resolution: Resolution, start: Instant) -> MoveChoice {
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            row = pos.row,
            col = pos.col,
            score,
            ?resolution,
            time_ms,
            "move selected"
        );
        MoveChoice {
            pos,
            score,
            resolution,
            time_ms,
        }
    }
}
