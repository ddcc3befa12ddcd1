//! Terminal input module (engine-facing).
//!
//! This module is independent of any terminal library. It reads raw bytes
//! from a [`ByteSource`] and decodes them into
//! [`crate::types::Command`] values, one per call, handling arrow-key escape
//! sequences and silently dropping the ones it does not know.

pub mod decoder;
pub mod source;

pub use tui_minesweeper_types as types;

pub use decoder::Decoder;
pub use source::{ByteSource, PushbackReader};
