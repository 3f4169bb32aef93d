//! Command-line front end
//!
//! `randpick <min> <max> [count]` prints `count` integers drawn from
//! `[min, max]`, one per line.
//!
//! Everything the user sees goes to the output writer handed to [`run`],
//! including usage and error lines. The return value is the process exit
//! status.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::rng::{EntropySource, generate};

/// Exit status for a completed run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for usage errors, bad arguments, and generation failures.
pub const EXIT_FAILURE: u8 = 1;

const DEFAULT_PROGRAM: &str = "randpick";

/// Errors found while reading the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fewer than two positional arguments.
    #[error("Usage: {program} <min> <max> [count]")]
    Usage { program: String },

    /// An argument that is not a base-10 `i64`.
    #[error("invalid {name} '{value}': expected an integer")]
    InvalidNumber { name: &'static str, value: String },
}

/// A parsed command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub min: i64,
    pub max: i64,
    /// Number of draws. Zero or negative means no draws.
    pub count: i64,
}

impl Invocation {
    /// Parses `args`, where the first item is the program name.
    ///
    /// Arguments past `count` are ignored.
    pub fn parse<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| DEFAULT_PROGRAM.to_owned());

        let (Some(min), Some(max)) = (args.next(), args.next()) else {
            return Err(CliError::Usage { program });
        };

        let min = parse_int("min", min)?;
        let max = parse_int("max", max)?;
        let count = match args.next() {
            Some(count) => parse_int("count", count)?,
            None => 1,
        };

        Ok(Self { min, max, count })
    }
}

fn parse_int(name: &'static str, value: String) -> Result<i64, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber { name, value })
}

/// Runs the generator for the given command line.
///
/// Draws stop at the first error. Lines already written are kept, an
/// `Error: ...` line is appended, and [`EXIT_FAILURE`] is returned.
///
/// # Errors
///
/// Only failures to write to `out` are returned as `Err`.
pub fn run<I, T, S, W>(args: I, source: &mut S, out: &mut W) -> io::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
    S: EntropySource + ?Sized,
    W: Write + ?Sized,
{
    let status = execute(args, source, out)?;
    out.flush()?;

    Ok(status)
}

fn execute<I, T, S, W>(args: I, source: &mut S, out: &mut W) -> io::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
    S: EntropySource + ?Sized,
    W: Write + ?Sized,
{
    let invocation = match Invocation::parse(args) {
        Ok(invocation) => invocation,
        Err(usage @ CliError::Usage { .. }) => {
            writeln!(out, "{usage}")?;
            return Ok(EXIT_FAILURE);
        }
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            return Ok(EXIT_FAILURE);
        }
    };

    debug!(?invocation, "parsed arguments");

    for _ in 0..invocation.count {
        match generate(source, invocation.min, invocation.max) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(err) => {
                writeln!(out, "Error: {err}")?;
                return Ok(EXIT_FAILURE);
            }
        }
    }

    Ok(EXIT_SUCCESS)
}
