//! TerminalRenderer: flushes board frames, bells, and prompts to a terminal.
//!
//! Every draw is a full redraw of the board frame; the board is small and the
//! loop only redraws after input. The terminal cursor doubles as the board
//! cursor, so it stays visible and is parked on the selected cell.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::board_view::BoardView;
use crate::clock::format_elapsed;
use crate::core::{BoardSnapshot, Frontend, Prompt};
use crate::fb::{CellStyle, FrameBuffer, Tone};
use crate::types::BEL;

/// One line of prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptLine {
    pub text: String,
    pub reverse: bool,
}

/// Lines shown for a prompt, top to bottom.
pub fn prompt_lines(prompt: &Prompt) -> Vec<PromptLine> {
    match prompt {
        Prompt::Quit => vec![PromptLine {
            text: "Really quit? [y/N] ".to_string(),
            reverse: false,
        }],
        Prompt::PlayAgain { outcome, elapsed } => vec![
            PromptLine {
                text: format!("{} ({})", format_elapsed(*elapsed), outcome.banner()),
                reverse: true,
            },
            PromptLine {
                text: "Play again? [y/N] ".to_string(),
                reverse: false,
            },
        ],
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    view: BoardView,
    buf: Vec<u8>,
    /// First screen row below the board frame.
    prompt_row: u16,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            view: BoardView::new(),
            buf: Vec::with_capacity(4 * 1024),
            prompt_row: 0,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

impl<W: Write> Frontend for TerminalRenderer<W> {
    fn draw(&mut self, snapshot: &BoardSnapshot) -> io::Result<()> {
        let fb = self.view.render(snapshot);
        let (cx, cy) = self.view.cursor_position(snapshot);
        self.prompt_row = fb.height();

        self.buf.clear();
        encode_frame_into(&fb, &mut self.buf)?;
        self.buf.queue(cursor::MoveTo(cx, cy))?;
        self.flush_buf()
    }

    fn alert(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.push(BEL);
        self.flush_buf()
    }

    fn show_prompt(&mut self, prompt: &Prompt) -> io::Result<()> {
        self.buf.clear();
        for (row, line) in (self.prompt_row..).zip(prompt_lines(prompt)) {
            self.buf.queue(cursor::MoveTo(0, row))?;
            self.buf
                .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            if line.reverse {
                self.buf.queue(SetAttribute(Attribute::Reverse))?;
            }
            self.buf.queue(Print(line.text))?;
            self.buf.queue(SetAttribute(Attribute::Reset))?;
        }
        self.flush_buf()
    }

    fn clear_prompt(&mut self) -> io::Result<()> {
        self.buf.clear();
        for row in self.prompt_row..self.prompt_row.saturating_add(2) {
            self.buf.queue(cursor::MoveTo(0, row))?;
            self.buf
                .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        }
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`, starting at the screen origin.
///
/// This builds a sequence of crossterm commands without writing to the terminal.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tone_to_color(style.tone)))?;
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn tone_to_color(tone: Tone) -> Color {
    match tone {
        Tone::Default => Color::Reset,
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Red => Color::Red,
    }
}
