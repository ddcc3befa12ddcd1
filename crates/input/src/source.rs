//! Byte sources with a single byte of push-back.

use std::io::{self, ErrorKind, Read};

/// A blocking byte stream that can take back one byte.
pub trait ByteSource {
    /// Block until a byte is available. End of input is
    /// [`ErrorKind::UnexpectedEof`].
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Return `byte` so the next [`ByteSource::read_byte`] yields it again.
    ///
    /// Only one byte of push-back is guaranteed; a second call before a read
    /// replaces the first.
    fn unread(&mut self, byte: u8);
}

/// Wraps any [`Read`] with a one-byte lookahead slot.
#[derive(Debug)]
pub struct PushbackReader<R> {
    inner: R,
    pushed: Option<u8>,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for PushbackReader<R> {
    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.pushed.take() {
            return Ok(byte);
        }

        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Err(ErrorKind::UnexpectedEof.into()),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn unread(&mut self, byte: u8) {
        self.pushed = Some(byte);
    }
}
