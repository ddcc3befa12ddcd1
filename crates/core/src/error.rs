use thiserror::Error;

/// Startup-time configuration problems; no board is ever built from these.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 1x1 (got {width}x{height})")]
    EmptyBoard { width: u16, height: u16 },
    #[error("nbombs (={mines}) more than or equal to width * height (={cells})")]
    TooManyMines { mines: usize, cells: usize },
}

/// Errors from building a board with an explicit mine layout.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: u16, y: u16 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = BoardError> = core::result::Result<T, E>;
