//! Entropy sources
//!
//! An [`EntropySource`] is anything that can fill a byte buffer with
//! randomness. The bounded generator only ever talks to this trait, which
//! keeps the operating system out of the arithmetic and lets tests swap in
//! a scripted byte stream.

use std::io;

use crate::os::sys_random;

/// A provider of random bytes.
///
/// Implementations must either fill the whole buffer or return an error;
/// a partially filled buffer is never a success.
pub trait EntropySource {
    /// Fills `buf` completely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        (**self).fill_bytes(buf)
    }
}

/// Entropy read straight from the operating system CSPRNG.
///
/// The type holds no state. Every call goes to the kernel (or the platform
/// equivalent), and nothing is buffered between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        sys_random(buf)
    }
}

/// A deterministic source that hands out a fixed byte sequence.
///
/// Bytes are served in order. Once the sequence cannot satisfy a request,
/// the request fails with [`io::ErrorKind::UnexpectedEof`] and nothing is
/// consumed.
///
/// This is **not** a secure source. It exists so that the range mapping
/// can be checked against known inputs and runs can be replayed.
#[derive(Clone, Debug)]
pub struct ReplayEntropy {
    bytes: Vec<u8>,
    pos: usize,
}

impl ReplayEntropy {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }

    /// Builds a source that yields each word as 4 little-endian bytes.
    pub fn from_words(words: &[u32]) -> Self {
        Self::new(
            words
                .iter()
                .flat_map(|w| w.to_le_bytes())
                .collect::<Vec<u8>>(),
        )
    }

    /// Number of bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl EntropySource for ReplayEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        if self.remaining() < buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "replay entropy exhausted",
            ));
        }

        let end = self.pos + buf.len();
        buf.copy_from_slice(&self.bytes[self.pos..end]);
        self.pos = end;

        Ok(())
    }
}
