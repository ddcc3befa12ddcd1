//! Board dimensions and mine count, validated once at startup.

use crate::error::ConfigError;
use crate::types::{default_mine_count, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    width: u16,
    height: u16,
    mines: usize,
}

impl GameConfig {
    /// Validate a configuration.
    ///
    /// Rejects empty boards and any mine count that would leave no safe cell.
    ///
    /// ```
    /// use tui_minesweeper_core::{ConfigError, GameConfig};
    ///
    /// assert!(GameConfig::new(9, 9, 10).is_ok());
    /// assert_eq!(
    ///     GameConfig::new(2, 2, 4),
    ///     Err(ConfigError::TooManyMines { mines: 4, cells: 4 })
    /// );
    /// ```
    pub fn new(width: u16, height: u16, mines: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        let cells = usize::from(width) * usize::from(height);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells });
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    /// Same as [`GameConfig::new`] with the default mine density.
    pub fn with_default_mines(width: u16, height: u16) -> Result<Self, ConfigError> {
        Self::new(width, height, default_mine_count(width, height))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub fn safe_cell_count(&self) -> usize {
        self.cell_count() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mines: default_mine_count(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nine_by_nine() {
        let config = GameConfig::default();
        assert_eq!((config.width(), config.height()), (9, 9));
        assert_eq!(config.mines(), 9);
        assert_eq!(config.safe_cell_count(), 72);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GameConfig::new(0, 5, 0),
            Err(ConfigError::EmptyBoard {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn mine_count_must_leave_a_safe_cell() {
        assert!(GameConfig::new(3, 3, 8).is_ok());
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(ConfigError::TooManyMines { mines: 9, cells: 9 })
        );
        assert!(GameConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn default_mines_follow_density() {
        let config = GameConfig::with_default_mines(16, 16).unwrap();
        assert_eq!(config.mines(), 31);
    }
}
