//! Bounded random integers from operating system entropy
//!
//! This crate draws integers from an inclusive range `[min, max]` using the
//! operating system's cryptographically secure random number generator,
//! and ships a small command-line front end (`randpick`) on top of it.
//!
//! # Module overview
//!
//! - `os`  
//!   Platform entropy layer. Selects `getrandom(2)`, `arc4random_buf` or
//!   `BCryptGenRandom` at compile time and reports failures as
//!   `std::io::Error`. Private to the crate.
//!
//! - `rng`  
//!   The [`rng::EntropySource`] capability, its OS-backed and replayable
//!   implementations, and the bounded integer mapping
//!   ([`rng::generate`]).
//!
//! - `error`  
//!   [`error::RandomError`], which separates invalid ranges from entropy
//!   failures.
//!
//! - `cli`  
//!   Argument parsing and the print loop used by the binary.
//!
//! - `logging`  
//!   `tracing` subscriber setup for the binary.
//!
//! # Example
//!
//! ```
//! use randpick::rng::random_int;
//!
//! let roll = random_int(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! # Non-uniformity
//!
//! The range mapping uses modulo reduction over a 31-bit value. See
//! [`rng::generate`] for the resulting bias.

mod os;

pub mod cli;
pub mod error;
pub mod logging;
pub mod rng;
