//! Property-based invariant tests for the board and the input decoder.
//!
//! 1. Every non-mine cell counts its mine neighbours; mines carry 0.
//! 2. Generation places exactly the configured mines, never on the opened cell.
//! 3. A flood opens exactly the 4-connected zero region plus its border.
//! 4. Counters agree with the grid after any sequence of opens and flags.
//! 5. The board is won exactly when every safe cell is open.
//! 6. The decoder never panics on arbitrary bytes.

use std::collections::VecDeque;

use proptest::prelude::*;
use tui_minesweeper::core::{Board, GameConfig, OpenOutcome};
use tui_minesweeper::input::{Decoder, PushbackReader};

// ── Helpers ─────────────────────────────────────────────────────────────

/// (width, height, mines, seed, first_x, first_y)
fn board_strategy() -> impl Strategy<Value = (u16, u16, usize, u64, u16, u16)> {
    (1u16..=16, 1u16..=16)
        .prop_filter("need a safe cell", |(w, h)| w * h >= 2)
        .prop_flat_map(|(w, h)| {
            let cells = usize::from(w) * usize::from(h);
            (
                Just(w),
                Just(h),
                0..cells,
                any::<u64>(),
                0..w,
                0..h,
            )
        })
}

fn generated(w: u16, h: u16, mines: usize, seed: u64, x: u16, y: u16) -> Board {
    let mut board = Board::with_seed(GameConfig::new(w, h, mines).unwrap(), seed);
    board.generate(x, y);
    board
}

fn mine_neighbours(board: &Board, x: u16, y: u16) -> u8 {
    let mut count = 0;
    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            let (nx, ny) = (i32::from(x) + dx, i32::from(y) + dy);
            if (dx, dy) == (0, 0) || nx < 0 || ny < 0 {
                continue;
            }
            if board.cell(nx as u16, ny as u16).is_some_and(|c| c.is_mine) {
                count += 1;
            }
        }
    }
    count
}

/// Breadth-first reference for the set of cells a reveal at (x, y) opens.
fn expected_region(board: &Board, x: u16, y: u16) -> Vec<bool> {
    let (w, h) = (board.width(), board.height());
    let idx = |x: u16, y: u16| usize::from(y) * usize::from(w) + usize::from(x);
    let mut seen = vec![false; usize::from(w) * usize::from(h)];
    let mut queue = VecDeque::from([(x, y)]);
    seen[idx(x, y)] = true;

    while let Some((cx, cy)) = queue.pop_front() {
        if board.cell(cx, cy).unwrap().adjacent_count != 0 {
            continue;
        }
        let candidates = [
            (cx.checked_sub(1), Some(cy)),
            (Some(cx + 1), Some(cy)),
            (Some(cx), cy.checked_sub(1)),
            (Some(cx), Some(cy + 1)),
        ];
        for (nx, ny) in candidates {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= w || ny >= h || seen[idx(nx, ny)] {
                continue;
            }
            seen[idx(nx, ny)] = true;
            queue.push_back((nx, ny));
        }
    }
    seen
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Adjacency counts
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjacency_counts_are_exact((w, h, mines, seed, fx, fy) in board_strategy()) {
        let board = generated(w, h, mines, seed, fx, fy);
        for y in 0..h {
            for x in 0..w {
                let cell = board.cell(x, y).unwrap();
                let expected = if cell.is_mine { 0 } else { mine_neighbours(&board, x, y) };
                prop_assert_eq!(cell.adjacent_count, expected, "cell ({}, {})", x, y);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Mine count and first-open exclusion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generation_respects_count_and_exclusion((w, h, mines, seed, fx, fy) in board_strategy()) {
        let board = generated(w, h, mines, seed, fx, fy);
        prop_assert_eq!(board.mine_positions().len(), mines);
        prop_assert!(!board.cell(fx, fy).unwrap().is_mine);
        prop_assert!(board.cells().iter().all(|c| !c.is_open && !c.is_flagged));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Flood region
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flood_matches_reference((w, h, mines, seed, fx, fy) in board_strategy()) {
        let mut board = generated(w, h, mines, seed, fx, fy);
        let expected = expected_region(&board, fx, fy);
        let expected_cells = expected.iter().filter(|b| **b).count();

        prop_assert_eq!(board.reveal(fx, fy), OpenOutcome::Opened { cells: expected_cells });
        for (i, cell) in board.cells().iter().enumerate() {
            prop_assert_eq!(cell.is_open, expected[i], "index {}", i);
            prop_assert!(!(cell.is_open && cell.is_mine));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Counters and win condition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn counters_track_grid(
        (w, h, mines, seed, fx, fy) in board_strategy(),
        actions in prop::collection::vec((any::<bool>(), any::<u16>(), any::<u16>()), 0..64),
    ) {
        let mut board = Board::with_seed(GameConfig::new(w, h, mines).unwrap(), seed);
        board.open(fx, fy);

        for (flag, x, y) in actions {
            let (x, y) = (x % w, y % h);
            if flag {
                board.toggle_flag(x, y);
            } else if board.open(x, y) == OpenOutcome::Detonated {
                break;
            }

            let opened = board.cells().iter().filter(|c| c.is_open).count();
            let flagged = board.cells().iter().filter(|c| c.is_flagged).count();
            prop_assert_eq!(board.opened_count(), opened);
            prop_assert_eq!(board.flagged_count(), flagged);
            prop_assert!(board.cells().iter().all(|c| !(c.is_open && c.is_flagged)));
            prop_assert_eq!(board.has_won(), opened == usize::from(w) * usize::from(h) - mines);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Decoder totality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut decoder = Decoder::new(PushbackReader::new(bytes.as_slice()));
        let mut decoded = 0usize;
        while decoder.decode().is_ok() {
            decoded += 1;
            // Each command consumes at least one byte, except a replayed one.
            prop_assert!(decoded <= bytes.len() * 2);
        }
    }
}
