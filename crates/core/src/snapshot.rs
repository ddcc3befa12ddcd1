use std::time::Duration;

use crate::types::{Cell, Outcome};

/// Everything a renderer needs to redraw the grid and the status text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major copy of the grid.
    pub cells: Vec<Cell>,
    pub cursor: (u16, u16),
    pub mine_count: usize,
    pub flagged_count: usize,
    pub opened_count: usize,
    pub elapsed: Option<Duration>,
    /// Mines to show after a loss; empty while playing.
    pub exposed_mines: Vec<(u16, u16)>,
    /// Set once the round has ended.
    pub outcome: Option<Outcome>,
}

impl BoardSnapshot {
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }

    pub fn is_exposed_mine(&self, x: u16, y: u16) -> bool {
        self.exposed_mines.contains(&(x, y))
    }

    pub fn playable(&self) -> bool {
        self.outcome.is_none()
    }
}
