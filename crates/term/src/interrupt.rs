//! Ctrl-C handling for raw mode.
//!
//! Raw mode disables the terminal's signal keys, so Ctrl-C reaches the game
//! as a plain byte. [`InterruptGuard`] turns that byte into an
//! [`io::ErrorKind::Interrupted`] error, which ends the session at once so
//! the caller can restore the terminal and leave.

use std::io;

use crate::types::{Command, CommandSource, KEY_INTERRUPT};

/// Command source wrapper that ends the session on Ctrl-C.
#[derive(Debug)]
pub struct InterruptGuard<S> {
    inner: S,
}

impl<S: CommandSource> InterruptGuard<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CommandSource> CommandSource for InterruptGuard<S> {
    fn next_command(&mut self) -> io::Result<Command> {
        let command = self.inner.next_command()?;
        if command.is_char(KEY_INTERRUPT) {
            return Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "interrupted by Ctrl-C",
            ));
        }
        Ok(command)
    }
}

/// Whether a session error is a normal way out: Ctrl-C or closed input.
pub fn ends_session(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Replay(Vec<Command>);

    impl CommandSource for Replay {
        fn next_command(&mut self) -> io::Result<Command> {
            if self.0.is_empty() {
                return Err(io::ErrorKind::UnexpectedEof.into());
            }
            Ok(self.0.remove(0))
        }
    }

    #[test]
    fn ctrl_c_becomes_interrupted() {
        let mut guard = InterruptGuard::new(Replay(vec![
            Command::Char(b'f'),
            Command::Char(KEY_INTERRUPT),
            Command::Char(b'q'),
        ]));
        assert_eq!(guard.next_command().unwrap(), Command::Char(b'f'));

        let err = guard.next_command().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
        assert!(ends_session(&err));
    }

    #[test]
    fn other_errors_are_real_failures() {
        assert!(ends_session(&io::ErrorKind::UnexpectedEof.into()));
        assert!(!ends_session(&io::Error::other("tty gone")));
    }
}
