//! Input decoder state machine.
//!
//! Turns raw terminal bytes into one [`Command`] per call:
//!
//! - `0`-`9` become [`Command::Digit`]
//! - `h`/`j`/`k`/`l` and the arrow keys (`ESC [ A`..`D`) become [`Command::Move`]
//! - `ESC` followed by anything but `[` is dropped; the following byte is
//!   reported as a plain [`Command::Char`] and also pushed back, so the next
//!   call decodes it again
//! - any other CSI sequence is consumed up to its final byte (`0x40..=0x7E`)
//!   and discarded without a command
//! - every other byte becomes [`Command::Char`]

use std::io;

use tracing::trace;

use crate::source::ByteSource;
use crate::types::{Command, CommandSource, Direction, CSI_FINAL_BYTES, CSI_INTRODUCER, ESC};

/// Decoder state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
    /// Waiting for the first byte of a command.
    #[default]
    Start,
    /// After ESC (0x1B).
    EscSeen,
    /// After ESC [ (CSI introducer).
    Csi,
    /// Inside an unrecognised CSI sequence; holds the last byte consumed.
    SkipUnknown(u8),
}

#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
}

impl<S: ByteSource> Decoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Block until a full command has been decoded.
    pub fn decode(&mut self) -> io::Result<Command> {
        let mut state = DecodeState::Start;
        loop {
            state = match state {
                DecodeState::Start => {
                    let byte = self.source.read_byte()?;
                    match byte {
                        b'0'..=b'9' => return Ok(Command::Digit(byte - b'0')),
                        ESC => DecodeState::EscSeen,
                        _ => {
                            return Ok(match Direction::from_vi_key(byte) {
                                Some(dir) => Command::Move(dir),
                                None => Command::Char(byte),
                            })
                        }
                    }
                }
                DecodeState::EscSeen => {
                    let byte = self.source.read_byte()?;
                    if byte == CSI_INTRODUCER {
                        DecodeState::Csi
                    } else {
                        self.source.unread(byte);
                        return Ok(Command::Char(byte));
                    }
                }
                DecodeState::Csi => {
                    let byte = self.source.read_byte()?;
                    match Direction::from_csi_final(byte) {
                        Some(dir) => return Ok(Command::Move(dir)),
                        None => DecodeState::SkipUnknown(byte),
                    }
                }
                DecodeState::SkipUnknown(last) => {
                    if CSI_FINAL_BYTES.contains(&last) {
                        trace!(final_byte = last, "discarded escape sequence");
                        DecodeState::Start
                    } else {
                        DecodeState::SkipUnknown(self.source.read_byte()?)
                    }
                }
            };
        }
    }
}

impl<S: ByteSource> CommandSource for Decoder<S> {
    fn next_command(&mut self) -> io::Result<Command> {
        self.decode()
    }
}
