//! Report renderers for detection results.
//!
//! - [`terminal`] — colored table of classified files; respects `--verbose` / `--quiet`.
//!
//! JSON output serializes [`License`](license_detectr::License) directly.

pub mod terminal;
