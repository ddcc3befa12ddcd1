//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the board engine, the input
//! decoder, and the terminal layer. All types are plain data with no external
//! dependencies, so every other crate in the workspace can use them.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 9 | Columns when no width is given |
//! | `DEFAULT_HEIGHT` | 9 | Rows when no height is given |
//! | `DEFAULT_MINE_DENSITY` | 0.123 | Mines per cell when no count is given |
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{default_mine_count, Command, Direction, DEFAULT_WIDTH};
//!
//! assert_eq!(Direction::from_vi_key(b'k'), Some(Direction::Up));
//! assert_eq!(Command::Move(Direction::Left).direction(), Some(Direction::Left));
//! assert_eq!(default_mine_count(DEFAULT_WIDTH, DEFAULT_WIDTH), 9);
//! ```

use std::io;

/// Board width used when none is configured
pub const DEFAULT_WIDTH: u16 = 9;

/// Board height used when none is configured
pub const DEFAULT_HEIGHT: u16 = 9;

/// Fraction of cells that hold a mine when no count is configured
pub const DEFAULT_MINE_DENSITY: f64 = 0.123;

/// Escape byte that opens a terminal escape sequence
pub const ESC: u8 = 0x1B;

/// Byte that follows ESC to introduce a CSI sequence
pub const CSI_INTRODUCER: u8 = b'[';

/// Range of bytes that terminate a CSI sequence
pub const CSI_FINAL_BYTES: std::ops::RangeInclusive<u8> = 64..=126;

/// Audible bell
pub const BEL: u8 = 0x07;

/// Key that toggles a flag under the cursor
pub const KEY_FLAG: u8 = b'f';

/// Key that opens the cell under the cursor
pub const KEY_OPEN: u8 = b' ';

/// Key that discards the board and starts over
pub const KEY_RESTART: u8 = b'r';

/// Key that asks to leave the game
pub const KEY_QUIT: u8 = b'q';

/// Ctrl-C as it arrives in raw mode, where the terminal no longer turns it
/// into SIGINT
pub const KEY_INTERRUPT: u8 = 0x03;

/// Mine count derived from [`DEFAULT_MINE_DENSITY`], rounded down.
pub fn default_mine_count(width: u16, height: u16) -> usize {
    (DEFAULT_MINE_DENSITY * f64::from(width) * f64::from(height)) as usize
}

/// Cursor movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Map a vi movement key (`h`/`j`/`k`/`l`) to a direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_minesweeper_types::Direction;
    ///
    /// assert_eq!(Direction::from_vi_key(b'h'), Some(Direction::Left));
    /// assert_eq!(Direction::from_vi_key(b'j'), Some(Direction::Down));
    /// assert_eq!(Direction::from_vi_key(b'x'), None);
    /// ```
    pub fn from_vi_key(byte: u8) -> Option<Self> {
        match byte {
            b'h' => Some(Direction::Left),
            b'j' => Some(Direction::Down),
            b'k' => Some(Direction::Up),
            b'l' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map the final byte of an arrow-key CSI sequence (`ESC [ A..D`)
    pub fn from_csi_final(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Direction::Up),
            b'B' => Some(Direction::Down),
            b'C' => Some(Direction::Right),
            b'D' => Some(Direction::Left),
            _ => None,
        }
    }

    /// Unit step `(dx, dy)` for this direction; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// One decoded input command
///
/// The decoder produces exactly one of these per pass; the game loop gives
/// them meaning (repeat counts, flagging, opening, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A decimal digit `0..=9`
    Digit(u8),
    /// Cursor movement from a vi key or an arrow key
    Move(Direction),
    /// Any other byte, passed through verbatim
    Char(u8),
}

impl Command {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Move(dir) => Some(*dir),
            _ => None,
        }
    }

    pub fn is_char(&self, byte: u8) -> bool {
        matches!(self, Command::Char(b) if *b == byte)
    }
}

/// Anything that yields decoded commands, blocking until one is available.
pub trait CommandSource {
    /// Return the next command. End of input is reported as
    /// [`io::ErrorKind::UnexpectedEof`].
    fn next_command(&mut self) -> io::Result<Command>;
}

impl<S: CommandSource + ?Sized> CommandSource for &mut S {
    fn next_command(&mut self) -> io::Result<Command> {
        (**self).next_command()
    }
}

/// State of a single board position
///
/// Stored by value in a flat row-major grid (`y * width + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub is_open: bool,
    pub is_mine: bool,
    pub is_flagged: bool,
    /// Mines among the up-to-8 neighbours; always 0 on a mine cell.
    pub adjacent_count: u8,
}

impl Cell {
    /// A closed cell may still be opened or flagged.
    pub fn is_closed(&self) -> bool {
        !self.is_open
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Banner shown next to the elapsed time at round end
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Won => "You win!",
            Outcome::Lost => "BOOM!",
        }
    }
}
