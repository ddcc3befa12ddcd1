//! Terminal rendering module.
//!
//! A small rendering layer for the board: a snapshot is mapped into a
//! framebuffer by [`BoardView`] and flushed by [`TerminalRenderer`], which
//! also rings the bell and draws yes/no prompts under the board.
//! [`InterruptGuard`] restores Ctrl-C as a way out while raw mode is on.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Keep layout pure and unit-testable
//! - Match the classic two-columns-per-cell board drawing

pub mod board_view;
pub mod clock;
pub mod fb;
pub mod interrupt;
pub mod renderer;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_types as types;

pub use board_view::{glyph, BoardView};
pub use clock::format_elapsed;
pub use fb::{Cell, CellStyle, FrameBuffer, Tone};
pub use interrupt::{ends_session, InterruptGuard};
pub use renderer::{encode_frame_into, prompt_lines, PromptLine, TerminalRenderer};
