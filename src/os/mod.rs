//! Operating system entropy layer
//!
//! This module provides a unified interface to the operating system's
//! cryptographically secure random number generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same
//! `sys_random(&mut [u8]) -> io::Result<()>` function, so the rest of the
//! crate never needs to know which kernel interface is behind it.
//!
//! Unlike a seeding helper, these functions report failure instead of
//! aborting: an unavailable entropy pool is an environment error the caller
//! is expected to surface.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
