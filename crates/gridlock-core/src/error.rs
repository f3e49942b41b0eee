//! Error types for parsing commands and directions from text.

use std::error::Error;
use std::fmt;

/// Errors from parsing a command string.
///
/// Returned by [`parse_commands`](crate::parse_commands). Parsing is
/// atomic: the first unrecognized symbol rejects the whole string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A character outside the `L`/`R`/`F` alphabet was encountered.
    UnrecognizedSymbol {
        /// The offending character.
        symbol: char,
        /// Byte index of the character within the input.
        index: usize,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedSymbol { symbol, index } => {
                write!(f, "unrecognized command symbol '{symbol}' at index {index}")
            }
        }
    }
}

impl Error for CommandError {}

/// Errors from parsing a [`Direction`](crate::Direction) from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectionError {
    /// The input was a single character, but not one of `N`, `S`, `E`, `W`.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
    },
    /// The input was empty or held more than one character.
    NotSingle {
        /// The input as received.
        input: String,
    },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { symbol } => {
                write!(f, "unknown direction symbol '{symbol}'")
            }
            Self::NotSingle { input } => {
                write!(f, "expected a single direction symbol, got '{input}'")
            }
        }
    }
}

impl Error for DirectionError {}
