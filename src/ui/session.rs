//! UI session state: the game plus the AI worker
//!
//! The engine runs on a worker thread so the UI never blocks; results
//! come back over an mpsc channel and are applied on the next frame.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::{AiPlayer, Game, MoveChoice, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs engine
    PvE { human_color: Stone },
    /// Player vs player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// AI computation state
pub enum EngineState {
    Idle,
    Thinking {
        receiver: Receiver<MoveChoice>,
        start_time: Instant,
    },
}

/// Timer for the move in progress
pub struct TurnClock {
    start_time: Instant,
    pub last_engine_time: Option<Duration>,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            last_engine_time: None,
        }
    }
}

impl TurnClock {
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Everything the app needs to run one session
pub struct Session {
    pub game: Game,
    pub mode: GameMode,
    pub engine: AiPlayer,
    pub engine_state: EngineState,
    pub last_choice: Option<MoveChoice>,
    pub clock: TurnClock,
    pub message: Option<String>,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: Game::new(),
            mode,
            engine: AiPlayer::new(),
            engine_state: EngineState::Idle,
            last_choice: None,
            clock: TurnClock::default(),
            message: None,
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.engine_state = EngineState::Idle;
        self.last_choice = None;
        self.clock = TurnClock::default();
        self.message = None;
    }

    pub fn human_to_move(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.game.current_player() == human_color,
            GameMode::PvP => true,
        }
    }

    pub fn engine_to_move(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.game.current_player() != human_color,
            GameMode::PvP => false,
        }
    }

    pub fn engine_busy(&self) -> bool {
        matches!(self.engine_state, EngineState::Thinking { .. })
    }

    pub fn engine_elapsed(&self) -> Option<Duration> {
        match &self.engine_state {
            EngineState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            EngineState::Idle => None,
        }
    }

    /// Forward a board click from the human player
    pub fn try_place(&mut self, pos: Pos) {
        if self.game.is_over() || self.engine_busy() || !self.human_to_move() {
            return;
        }

        match self.game.play(pos) {
            Ok(()) => {
                self.message = None;
                self.clock.restart();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Kick off the worker thread for the engine's move
    pub fn spawn_engine(&mut self) {
        if !self.engine_to_move() || self.engine_busy() || self.game.is_over() {
            return;
        }

        let board = *self.game.board();
        let player = self.engine;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let choice = player.choose(&board);
            let _ = tx.send(choice);
        });

        self.engine_state = EngineState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the engine's move once the worker is done
    pub fn poll_engine(&mut self) {
        let received = match &self.engine_state {
            EngineState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(choice) => Some((choice, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.engine_state = EngineState::Idle;
                    self.message = Some("engine worker failed".to_string());
                    return;
                }
            },
            EngineState::Idle => None,
        };

        if let Some((choice, elapsed)) = received {
            self.engine_state = EngineState::Idle;
            self.last_choice = Some(choice);
            self.clock.last_engine_time = Some(elapsed);

            if let Err(err) = self.game.play(choice.pos) {
                self.message = Some(err.to_string());
            } else {
                self.clock.restart();
            }
        }
    }

    /// Take back the last move pair (PvE) or single move (PvP)
    pub fn undo(&mut self) {
        if self.engine_busy() {
            return;
        }

        self.game.undo();
        if matches!(self.mode, GameMode::PvE { .. }) {
            self.game.undo();
        }
        self.message = None;
        self.clock.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_turn_ownership() {
        let session = Session::new(GameMode::PvE {
            human_color: Stone::Black,
        });
        assert!(session.human_to_move());
        assert!(!session.engine_to_move());

        let session = Session::new(GameMode::PvE {
            human_color: Stone::White,
        });
        assert!(session.engine_to_move());

        let session = Session::new(GameMode::PvP);
        assert!(session.human_to_move());
        assert!(!session.engine_to_move());
    }

    #[test]
    fn test_try_place_and_undo_pair() {
        let mut session = Session::new(GameMode::PvE {
            human_color: Stone::Black,
        });

        session.try_place(Pos::new(7, 7));
        assert_eq!(session.game.moves_played(), 1);

        // Simulate the engine reply without a thread
        session.game.play(Pos::new(6, 7)).unwrap();
        assert_eq!(session.game.moves_played(), 2);

        // PvE undo removes both moves
        session.undo();
        assert_eq!(session.game.moves_played(), 0);
        assert_eq!(session.game.current_player(), Stone::Black);
    }

    #[test]
    fn test_try_place_out_of_turn_is_ignored() {
        let mut session = Session::new(GameMode::PvE {
            human_color: Stone::White,
        });
        // Black (engine) to move: human clicks are dropped
        session.try_place(Pos::new(7, 7));
        assert_eq!(session.game.moves_played(), 0);
    }
}
