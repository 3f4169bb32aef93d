//! Random number generation module
//!
//! This module turns operating system entropy into bounded integers.
//!
//! It is split in two layers:
//! - [`EntropySource`] and its implementations supply raw bytes
//! - [`generate`] maps those bytes onto an inclusive integer range
//!
//! Keeping the byte supply behind a trait means the range mapping can be
//! exercised with a fixed byte stream ([`ReplayEntropy`]) while production
//! code reads from the OS ([`OsEntropy`]).

mod bounded;
mod source;

pub use bounded::{ENTROPY_BYTES, generate, random_int, reduce, span};
pub use source::{EntropySource, OsEntropy, ReplayEntropy};
