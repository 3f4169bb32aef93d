//! Bounded random integers
//!
//! Maps 4 bytes of entropy onto an inclusive `[min, max]` range of `i64`.
//!
//! The mapping is:
//!
//! 1. read the bytes as a little-endian `u32`
//! 2. clear the top bit, giving a 31-bit value `r`
//! 3. return `min + (r mod (max - min + 1))`
//!
//! # Bias
//!
//! Step 3 is a plain modulo reduction. When the range size does not divide
//! `2^31`, low offsets are very slightly more likely than high ones, and
//! ranges wider than `2^31` only ever produce the first `2^31` values. No
//! rejection sampling is done, so output for a given byte stream is fixed
//! and reproducible.

use tracing::{debug, trace, warn};

use crate::error::RandomError;
use crate::rng::source::{EntropySource, OsEntropy};

/// Number of entropy bytes consumed per draw.
pub const ENTROPY_BYTES: usize = 4;

const SIGN_MASK: u32 = 0x7FFF_FFFF;

/// Returns `max - min` if the range is usable.
///
/// The difference is computed in `i128`, so no input can wrap. A range is
/// rejected when `max < min` or when the difference exceeds `i64::MAX`.
pub fn span(min: i64, max: i64) -> Result<u64, RandomError> {
    let span = i128::from(max) - i128::from(min);

    if span < 0 || span > i128::from(i64::MAX) {
        debug!(min, max, "rejecting range");
        return Err(RandomError::InvalidRange { min, max });
    }

    Ok(span as u64)
}

/// Maps raw entropy bytes onto `[min, max]` without touching any source.
pub fn reduce(bytes: [u8; ENTROPY_BYTES], min: i64, max: i64) -> Result<i64, RandomError> {
    let span = span(min, max)?;
    Ok(reduce_within(bytes, min, span))
}

// `span` is at most i64::MAX, so `span + 1` fits in u64 and
// `min + offset` never exceeds `max`.
fn reduce_within(bytes: [u8; ENTROPY_BYTES], min: i64, span: u64) -> i64 {
    let r = u32::from_le_bytes(bytes) & SIGN_MASK;
    let offset = u64::from(r) % (span + 1);

    min.wrapping_add_unsigned(offset)
}

/// Draws an integer in `[min, max]` using entropy from `source`.
///
/// The range is checked before any bytes are requested, so an invalid
/// range leaves the source untouched.
///
/// The result is only near-uniform: see the module notes on modulo bias.
///
/// # Errors
///
/// - [`RandomError::InvalidRange`] if `max < min` or the range is wider
///   than `i64::MAX`
/// - [`RandomError::EntropySource`] if the source could not supply bytes
pub fn generate<S>(source: &mut S, min: i64, max: i64) -> Result<i64, RandomError>
where
    S: EntropySource + ?Sized,
{
    let span = span(min, max)?;

    let mut bytes = [0u8; ENTROPY_BYTES];
    source.fill_bytes(&mut bytes).map_err(|err| {
        warn!(error = %err, "entropy source failed");
        RandomError::EntropySource(err)
    })?;

    let value = reduce_within(bytes, min, span);
    bytes.fill(0);

    trace!(min, max, value, "drew bounded integer");
    Ok(value)
}

/// Draws an integer in `[min, max]` from the operating system CSPRNG.
///
/// Shorthand for [`generate`] with [`OsEntropy`].
pub fn random_int(min: i64, max: i64) -> Result<i64, RandomError> {
    generate(&mut OsEntropy, min, max)
}
