//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the minesweeper rules and state management. Apart from
//! the [`Session`] loop, which blocks on its collaborators, nothing here
//! performs I/O.
//!
//! # Module Structure
//!
//! - [`config`]: validated board dimensions and mine count
//! - [`board`]: the grid, lazy mine placement, flood reveal, flags, cursor
//! - [`game`]: play states, repeat counts, and command handling
//! - [`session`]: the blocking loop over a command source and a frontend
//! - [`snapshot`]: plain data handed to renderers
//!
//! # Rules
//!
//! - Mines are placed on the first open and never on the opened cell
//! - Opening a zero cell floods through its orthogonal neighbours
//! - The round is won once every safe cell is open; flags are optional
//! - Counts typed before a movement key repeat it, clamped at the edge
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::{Board, GameConfig, OpenOutcome};
//!
//! let mut board = Board::with_seed(GameConfig::new(9, 9, 10).unwrap(), 12345);
//! let outcome = board.open(4, 4);
//!
//! assert!(matches!(outcome, OpenOutcome::Opened { .. }));
//! assert!(!board.cell(4, 4).unwrap().is_mine);
//! assert!(board.opened_count() >= 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod snapshot;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, FlagOutcome, OpenOutcome};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError};
pub use game::{Effect, Effects, Game, PlayState, RepeatCount};
pub use session::{prompt_answer, Frontend, Prompt, Session};
pub use snapshot::BoardSnapshot;
