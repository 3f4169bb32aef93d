//! Error types for bounded random generation.

use std::io;

use thiserror::Error;

/// Errors returned by [`crate::rng::generate`] and friends.
///
/// The two variants separate caller mistakes from environment failures:
/// an `InvalidRange` is a bug in the inputs, an `EntropySource` error means
/// the machine could not supply random bytes.
#[derive(Debug, Error)]
pub enum RandomError {
    /// `max < min`, or `max - min` does not fit in an `i64`.
    #[error("Invalid range")]
    InvalidRange { min: i64, max: i64 },

    /// The entropy source failed to fill the buffer.
    #[error("Unable to generate random bytes")]
    EntropySource(#[source] io::Error),
}
