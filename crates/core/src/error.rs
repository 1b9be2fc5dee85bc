//! Typed errors for command-line encoding and decoding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors raised while encoding or decoding a command line.
///
/// Every variant is a deterministic input-validation failure: the same input
/// always fails the same way, so there is nothing to retry. No partial output
/// accompanies an error.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CmdlineError {
    /// A NUL character was found; the process-creation call would truncate
    /// the command line there.
    #[error("invalid NUL character in {location}")]
    InvalidNulCharacter {
        /// Where the NUL was found.
        location: NulLocation,
    },

    /// The program contains a quote, which the program token cannot escape.
    #[error("invalid '\"' character in program at offset {offset}")]
    InvalidProgramCharacter {
        /// Offset of the quote within the program.
        offset: usize,
    },

    /// The command line does not start with a quoted program.
    #[error("the program path must be quoted")]
    MissingProgramQuote,

    /// No program was given to encode.
    #[error("empty command: the program is required")]
    EmptyCommand,
}

/// Position of an offending NUL character.
///
/// Offsets are byte offsets for `&str` input and code-unit indices for wide
/// (UTF-16) input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "in", rename_all = "snake_case"))]
pub enum NulLocation {
    /// Inside the command line being decoded.
    Command {
        /// Offset within the command line.
        offset: usize,
    },
    /// Inside one element of the sequence being encoded.
    Argument {
        /// Index of the element; `0` is the program.
        index: usize,
        /// Offset within that element.
        offset: usize,
    },
}

impl fmt::Display for NulLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command { offset } => write!(f, "command at offset {offset}"),
            Self::Argument { index: 0, offset } => write!(f, "program at offset {offset}"),
            Self::Argument { index, offset } => {
                write!(f, "argument {index} at offset {offset}")
            }
        }
    }
}

impl NulLocation {
    /// Offset of the NUL within the scanned text.
    pub fn offset(&self) -> usize {
        match *self {
            Self::Command { offset } | Self::Argument { offset, .. } => offset,
        }
    }
}
