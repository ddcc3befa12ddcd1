//! Board module - owns the minefield grid, the cursor, and the counters
//!
//! The grid is a flat row-major vector (`y * width + x`). Mines are placed
//! lazily on the first open so the opened cell can be kept safe, and the
//! flood reveal runs on an explicit work stack so large empty regions never
//! grow the call stack.
//!
//! Coordinates: (x, y) where x ranges over columns (left to right) and y over
//! rows (top to bottom).

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::error::{BoardError, Result};
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, Direction};

/// All eight surrounding offsets, used for adjacency counts.
const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Orthogonal offsets, used for flood reveal. Diagonals are deliberately absent.
const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Result of an open (or reveal) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The request opened `cells` cells (1 for a numbered cell, more for a flood).
    Opened { cells: usize },
    /// The cell is flagged, already open, or off the board.
    Blocked,
    /// The cell holds a mine; the board is left untouched.
    Detonated,
}

/// Result of a flag toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    /// Open cells cannot carry a flag.
    Blocked,
}

impl FlagOutcome {
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

impl OpenOutcome {
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// The game board
#[derive(Debug, Clone)]
pub struct Board {
    config: GameConfig,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    cursor_x: u16,
    cursor_y: u16,
    flagged_count: usize,
    opened_count: usize,
    /// Set when mines are placed; doubles as the "generated" marker.
    start_time: Option<Instant>,
    rng: StdRng,
}

impl Board {
    /// Create a fresh board seeded from the operating system.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a fresh board whose minefield is fully determined by `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            cells: vec![Cell::default(); config.cell_count()],
            cursor_x: 0,
            cursor_y: 0,
            flagged_count: 0,
            opened_count: 0,
            start_time: None,
            rng,
        }
    }

    /// Create a board with mines at exactly `mines`, already generated.
    ///
    /// Duplicate coordinates count once. The resulting mine count must still
    /// leave at least one safe cell.
    pub fn with_mines(width: u16, height: u16, mines: &[(u16, u16)]) -> Result<Self> {
        // Validate dimensions before looking at coordinates.
        GameConfig::new(width, height, 0)?;

        let mut indices: Vec<usize> = Vec::with_capacity(mines.len());
        for &(x, y) in mines {
            if x >= width || y >= height {
                return Err(BoardError::OutOfBounds { x, y });
            }
            let idx = usize::from(y) * usize::from(width) + usize::from(x);
            if !indices.contains(&idx) {
                indices.push(idx);
            }
        }

        let config = GameConfig::new(width, height, indices.len())?;
        let mut board = Self::with_seed(config, 0);
        for idx in indices {
            board.place_mine(idx);
        }
        board.start_time = Some(Instant::now());
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width()
    }

    pub fn height(&self) -> u16 {
        self.config.height()
    }

    pub fn mine_count(&self) -> usize {
        self.config.mines()
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_count
    }

    pub fn opened_count(&self) -> usize {
        self.opened_count
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Whether mines have been placed yet.
    pub fn is_generated(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// Time since mines were placed, `None` before the first open.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|start| start.elapsed())
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width()) + usize::from(x))
    }

    #[inline(always)]
    fn coords(&self, idx: usize) -> (u16, u16) {
        let w = usize::from(self.width());
        ((idx % w) as u16, (idx / w) as u16)
    }

    /// In-bounds neighbours of `idx` for the given offset table (at most 8).
    fn neighbors(&self, idx: usize, offsets: &[(i32, i32)]) -> ArrayVec<usize, 8> {
        let (x, y) = self.coords(idx);
        let (w, h) = (self.width(), self.height());
        let mut out = ArrayVec::new();
        for &(dx, dy) in offsets {
            let nx = i32::from(x) + dx;
            let ny = i32::from(y) + dy;
            if nx < 0 || ny < 0 || nx >= i32::from(w) || ny >= i32::from(h) {
                continue;
            }
            out.push(ny as usize * usize::from(w) + nx as usize);
        }
        out
    }

    /// Place the configured number of mines, never on `(exclude_x, exclude_y)`.
    ///
    /// Uses rejection sampling over uniformly random cell indices. Only the
    /// excluded cell itself is guaranteed safe; its neighbours may be mines.
    /// Calling this on an already generated board does nothing.
    pub fn generate(&mut self, exclude_x: u16, exclude_y: u16) {
        if self.is_generated() {
            return;
        }

        let total = self.cells.len();
        let excluded = self.index(exclude_x, exclude_y);
        let mut remaining = self.mine_count();
        while remaining > 0 {
            let idx = self.rng.random_range(0..total);
            if Some(idx) == excluded || self.cells[idx].is_mine {
                continue;
            }
            self.place_mine(idx);
            remaining -= 1;
        }

        self.start_time = Some(Instant::now());
        debug!(
            mines = self.mine_count(),
            exclude_x, exclude_y, "minefield generated"
        );
    }

    fn place_mine(&mut self, idx: usize) {
        let cell = &mut self.cells[idx];
        cell.is_mine = true;
        cell.adjacent_count = 0;

        for n in self.neighbors(idx, &NEIGHBORS_8) {
            if !self.cells[n].is_mine {
                self.cells[n].adjacent_count += 1;
            }
        }
    }

    /// Open `idx`, clearing any flag. Caller guarantees it is closed.
    fn open_cell(&mut self, idx: usize) {
        let cell = &mut self.cells[idx];
        cell.is_open = true;
        if cell.is_flagged {
            cell.is_flagged = false;
            self.flagged_count -= 1;
        }
        self.opened_count += 1;
    }

    /// Open (x, y) and flood outwards through zero-count cells.
    ///
    /// The flood follows the four orthogonal neighbours only. Every opened
    /// zero cell pushes its closed neighbours, so the result is the maximal
    /// 4-connected zero region around the seed plus its numbered border.
    pub fn reveal(&mut self, x: u16, y: u16) -> OpenOutcome {
        let Some(seed) = self.index(x, y) else {
            return OpenOutcome::Blocked;
        };
        let cell = self.cells[seed];
        if cell.is_open || cell.is_flagged {
            return OpenOutcome::Blocked;
        }
        if cell.is_mine {
            return OpenOutcome::Detonated;
        }

        let before = self.opened_count;
        let mut stack = vec![seed];
        self.open_cell(seed);

        while let Some(idx) = stack.pop() {
            if self.cells[idx].adjacent_count != 0 {
                continue;
            }
            for n in self.neighbors(idx, &NEIGHBORS_4) {
                if !self.cells[n].is_open {
                    self.open_cell(n);
                    stack.push(n);
                }
            }
        }

        let cells = self.opened_count - before;
        trace!(x, y, cells, "reveal");
        OpenOutcome::Opened { cells }
    }

    /// Open (x, y), placing the mines first if this is the board's first open.
    pub fn open(&mut self, x: u16, y: u16) -> OpenOutcome {
        if !self.is_generated() {
            self.generate(x, y);
        }
        self.reveal(x, y)
    }

    /// Open the cell under the cursor.
    pub fn open_at_cursor(&mut self) -> OpenOutcome {
        self.open(self.cursor_x, self.cursor_y)
    }

    pub fn toggle_flag(&mut self, x: u16, y: u16) -> FlagOutcome {
        let Some(idx) = self.index(x, y) else {
            return FlagOutcome::Blocked;
        };
        let cell = &mut self.cells[idx];
        if cell.is_open {
            return FlagOutcome::Blocked;
        }
        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            FlagOutcome::Unflagged
        }
    }

    pub fn toggle_flag_at_cursor(&mut self) -> FlagOutcome {
        self.toggle_flag(self.cursor_x, self.cursor_y)
    }

    /// Every mine position in row-major order. Empty before generation.
    pub fn mine_positions(&self) -> Vec<(u16, u16)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_mine)
            .map(|(idx, _)| self.coords(idx))
            .collect()
    }

    /// All safe cells are open. Flags play no part.
    pub fn has_won(&self) -> bool {
        self.is_generated() && self.opened_count == self.config.safe_cell_count()
    }

    /// Move the cursor up to `steps` cells, stopping at the edge.
    ///
    /// Returns the number of steps actually taken.
    pub fn move_cursor(&mut self, dir: Direction, steps: u32) -> u32 {
        let (dx, dy) = dir.delta();
        let mut taken = 0;
        while taken < steps {
            let nx = i32::from(self.cursor_x) + dx;
            let ny = i32::from(self.cursor_y) + dy;
            if nx < 0 || ny < 0 || nx >= i32::from(self.width()) || ny >= i32::from(self.height())
            {
                break;
            }
            self.cursor_x = nx as u16;
            self.cursor_y = ny as u16;
            taken += 1;
        }
        taken
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.width();
        out.height = self.height();
        out.cells.clear();
        out.cells.extend_from_slice(&self.cells);
        out.cursor = self.cursor();
        out.mine_count = self.mine_count();
        out.flagged_count = self.flagged_count;
        out.opened_count = self.opened_count;
        out.elapsed = self.elapsed();
        out.exposed_mines.clear();
        out.outcome = None;
    }
}
