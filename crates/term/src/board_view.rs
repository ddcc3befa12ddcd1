//! BoardView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, for a `w`x`h` board:
//!
//! ```text
//! +-------------------+
//! | . . . 1   # . . . |   9x9 minesweeper
//! ...
//! +-------------------+
//! ```
//!
//! Each board cell is two columns wide (a blank and the glyph). Status and
//! help text sit to the right of the frame, aligned with board rows.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Tone};
use crate::types::Cell;

/// Columns reserved to the right of the frame for status text.
const PANEL_WIDTH: u16 = 40;

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView;

impl BoardView {
    pub fn new() -> Self {
        Self
    }

    /// Frame size in terminal cells, border included.
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        (
            snap.width.saturating_mul(2).saturating_add(3),
            snap.height.saturating_add(2),
        )
    }

    /// Screen position of the board cursor, relative to the frame origin.
    pub fn cursor_position(&self, snap: &BoardSnapshot) -> (u16, u16) {
        let (x, y) = snap.cursor;
        (x.saturating_mul(2).saturating_add(2), y.saturating_add(1))
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, snap: &BoardSnapshot) -> FrameBuffer {
        let (frame_w, frame_h) = self.frame_size(snap);
        let mut fb = FrameBuffer::new(frame_w.saturating_add(PANEL_WIDTH), frame_h);
        let border = CellStyle::PLAIN;

        self.draw_rule(&mut fb, 0, frame_w, border);
        self.draw_rule(&mut fb, frame_h - 1, frame_w, border);

        for y in 0..snap.height {
            let row = y + 1;
            fb.put_char(0, row, '|', border);
            for x in 0..snap.width {
                let cell = snap.cell(x, y).unwrap_or_default();
                let (ch, mut style) = glyph(cell);
                if snap.is_exposed_mine(x, y) {
                    style = style.reversed();
                }
                fb.put_char(x.saturating_mul(2).saturating_add(2), row, ch, style);
            }
            fb.put_char(frame_w - 1, row, '|', border);

            if let Some(text) = side_text(snap, y) {
                fb.put_str(frame_w, row, &text, CellStyle::PLAIN);
            }
        }
        fb
    }

    fn draw_rule(&self, fb: &mut FrameBuffer, y: u16, frame_w: u16, style: CellStyle) {
        fb.put_char(0, y, '+', style);
        for x in 1..frame_w - 1 {
            fb.put_char(x, y, '-', style);
        }
        fb.put_char(frame_w - 1, y, '+', style);
    }
}

/// Glyph and style for one board cell.
pub fn glyph(cell: Cell) -> (char, CellStyle) {
    if cell.is_flagged {
        return ('#', CellStyle::PLAIN);
    }
    if !cell.is_open {
        return ('.', CellStyle::PLAIN);
    }
    match cell.adjacent_count {
        0 => (' ', CellStyle::PLAIN),
        n => {
            let tone = match n {
                1 => Tone::Green,
                2..=4 => Tone::Yellow,
                _ => Tone::Red,
            };
            (char::from(b'0' + n), CellStyle::toned(tone))
        }
    }
}

fn side_text(snap: &BoardSnapshot, row: u16) -> Option<String> {
    let text = match row {
        1 => format!("   {}x{} minesweeper", snap.width, snap.height),
        2 => format!("   {} bombs", snap.mine_count),
        3 => format!(
            "   {} flag{} placed",
            snap.flagged_count,
            if snap.flagged_count == 1 { "" } else { "s" }
        ),
        5 => "   'f' to flag, <space> to open".to_string(),
        6 => "   arrow keys to move, 'r' to restart".to_string(),
        7 => "   'q' to quit".to_string(),
        _ => return None,
    };
    Some(text)
}
