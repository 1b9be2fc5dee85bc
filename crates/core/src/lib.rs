//! Windows command-line encoding and decoding.
//!
//! On Windows a process receives a single command-line string rather than an
//! argument vector. This crate converts between the two forms using the
//! quoting and backslash rules of the native C/C++ runtime argument parser.
//! The main entry points are [`encode`], which turns a program and its
//! arguments into a command line, and [`decode`], which splits a command line
//! back into the program and its arguments. [`encode_wide`] and
//! [`decode_wide`] do the same over UTF-16 code units.
//!
//! For every sequence without NUL characters and without a quote in the
//! program, `decode(&encode(args)?)?.args == args`.
//!
//! Both directions are pure and hold no state between calls.

#![warn(missing_docs)]

mod cursor;
/// Command line to program and arguments.
pub mod decode;
/// Program and arguments to command line.
pub mod encode;
/// Error types shared by both directions.
pub mod error;
mod units;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use decode::{DecodedCommand, decode, decode_wide};
pub use encode::{encode, encode_wide};
pub use error::{CmdlineError, NulLocation};
