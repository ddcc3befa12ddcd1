//! Game module - the play-state machine around a [`Board`]
//!
//! `Game` turns decoded [`Command`]s into board mutations and reports what the
//! surrounding loop has to do next as a short list of [`Effect`]s. It performs
//! no I/O: prompts and bells are requested, never executed here.
//!
//! States: `Playing` → `RoundEnd(Won | Lost)` → `Playing` (new board) or
//! `Terminated`. A restart or a new round replaces the board wholesale.

use arrayvec::ArrayVec;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::{Board, OpenOutcome};
use crate::config::GameConfig;
use crate::snapshot::BoardSnapshot;
use crate::types::{Command, Outcome, KEY_FLAG, KEY_OPEN, KEY_QUIT, KEY_RESTART};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    RoundEnd(Outcome),
    Terminated,
}

/// Requests from [`Game::handle`] to the surrounding loop, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Ring the bell: blocked action, bad key, stray repeat count, overflow.
    Alert,
    /// Ask the player whether to quit; answer with [`Game::confirm_quit`].
    ConfirmQuit,
    /// The round just ended; the next loop pass shows the outcome.
    RoundOver(Outcome),
}

pub type Effects = ArrayVec<Effect, 4>;

/// Decimal repeat prefix typed before a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatCount {
    value: u32,
    pending: bool,
}

impl RepeatCount {
    pub const fn new() -> Self {
        Self {
            value: 1,
            pending: false,
        }
    }

    /// Steps the next command would use.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether any digit has been accepted since the last reset.
    ///
    /// A typed `1` counts as pending even though its value equals the
    /// default, so `1f` still rings the bell like any stray count.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append a digit. A leading zero is ignored.
    ///
    /// Returns `false` when the new value would not fit; the count is then
    /// back at its default of 1.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        let digit = u32::from(digit);
        if !self.pending {
            if digit >= 1 {
                self.value = digit;
                self.pending = true;
            }
            return true;
        }

        match self
            .value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
        {
            Some(next) => {
                self.value = next;
                true
            }
            None => {
                *self = Self::new();
                false
            }
        }
    }

    /// Consume the count, resetting it to the default.
    pub fn take(&mut self) -> u32 {
        let value = self.value;
        *self = Self::new();
        value
    }
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    repeat: RepeatCount,
    state: PlayState,
    /// Source of per-board seeds, so a seeded session replays exactly.
    seeds: StdRng,
}

impl Game {
    /// Start a game whose boards are seeded from the operating system.
    pub fn new(config: GameConfig) -> Self {
        Self::from_seeds(config, StdRng::from_os_rng())
    }

    /// Start a game whose whole sequence of boards follows from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_seeds(config, StdRng::seed_from_u64(seed))
    }

    fn from_seeds(config: GameConfig, mut seeds: StdRng) -> Self {
        let board = Board::with_seed(config, seeds.random());
        Self {
            config,
            board,
            repeat: RepeatCount::new(),
            state: PlayState::Playing,
            seeds,
        }
    }

    /// Start from a prepared board; later boards reuse its configuration.
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self {
            config: board.config(),
            board,
            repeat: RepeatCount::new(),
            state: PlayState::Playing,
            seeds: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn repeat(&self) -> RepeatCount {
        self.repeat
    }

    pub fn is_terminated(&self) -> bool {
        self.state == PlayState::Terminated
    }

    /// Snapshot for rendering; exposes every mine once a round is lost.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = self.board.snapshot();
        if let PlayState::RoundEnd(outcome) = self.state {
            snap.outcome = Some(outcome);
            if outcome == Outcome::Lost {
                snap.exposed_mines = self.board.mine_positions();
            }
        }
        snap
    }

    /// Apply one command while playing. Commands in any other state are ignored.
    pub fn handle(&mut self, command: Command) -> Effects {
        let mut effects = Effects::new();
        if self.state != PlayState::Playing {
            return effects;
        }

        match command {
            Command::Digit(digit) => {
                if !self.repeat.push_digit(digit) {
                    debug!(digit, "repeat count overflow");
                    effects.push(Effect::Alert);
                }
            }
            Command::Move(dir) => {
                let steps = self.repeat.take();
                self.board.move_cursor(dir, steps);
            }
            Command::Char(byte) => {
                let had_repeat = self.repeat.is_pending();
                self.repeat.take();

                match byte {
                    KEY_QUIT => effects.push(Effect::ConfirmQuit),
                    KEY_FLAG => {
                        if self.board.toggle_flag_at_cursor().is_blocked() {
                            effects.push(Effect::Alert);
                        }
                    }
                    KEY_RESTART => self.restart(),
                    KEY_OPEN => self.open_at_cursor(&mut effects),
                    _ => effects.push(Effect::Alert),
                }

                // Repeat counts only apply to movement.
                if had_repeat {
                    effects.push(Effect::Alert);
                }
            }
        }
        effects
    }

    fn open_at_cursor(&mut self, effects: &mut Effects) {
        match self.board.open_at_cursor() {
            OpenOutcome::Blocked => effects.push(Effect::Alert),
            OpenOutcome::Detonated => {
                let (x, y) = self.board.cursor();
                info!(x, y, "mine detonated");
                self.end_round(Outcome::Lost, effects);
            }
            OpenOutcome::Opened { .. } => {
                if self.board.has_won() {
                    info!(elapsed = ?self.board.elapsed(), "board cleared");
                    self.end_round(Outcome::Won, effects);
                }
            }
        }
    }

    fn end_round(&mut self, outcome: Outcome, effects: &mut Effects) {
        self.state = PlayState::RoundEnd(outcome);
        effects.push(Effect::RoundOver(outcome));
    }

    /// Replace the board with a fresh one of the same configuration.
    pub fn restart(&mut self) {
        self.board = Board::with_seed(self.config, self.seeds.random());
        self.repeat = RepeatCount::new();
    }

    /// Resolve a quit prompt.
    pub fn confirm_quit(&mut self, quit: bool) {
        if quit {
            self.state = PlayState::Terminated;
        }
    }

    /// Resolve the end-of-round prompt: a new board, or the end of the session.
    pub fn finish_round(&mut self, play_again: bool) {
        if !matches!(self.state, PlayState::RoundEnd(_)) {
            return;
        }
        if play_again {
            self.restart();
            self.state = PlayState::Playing;
        } else {
            self.state = PlayState::Terminated;
        }
    }
}
