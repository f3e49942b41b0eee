//! The command alphabet, script parsing, and per-command step records.

use std::fmt;

use crate::error::CommandError;
use crate::id::{StepId, VehicleId};
use crate::position::Pose;

/// A single scripted instruction for one vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90 degrees counterclockwise in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise in place (`R`).
    TurnRight,
    /// Advance one cell along the current heading (`F`).
    MoveForward,
}

impl Command {
    /// The script symbol for this command.
    pub fn symbol(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::MoveForward => 'F',
        }
    }

    /// Parse a single script symbol.
    ///
    /// Only the uppercase letters `L`, `R`, `F` are recognized.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            'F' => Some(Self::MoveForward),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses a command script into its instruction sequence.
///
/// Parsing is atomic: either every character is a valid command symbol
/// and the full sequence is returned, or the first offending character
/// rejects the whole input and nothing is produced. The empty string
/// parses to an empty sequence.
///
/// # Examples
///
/// ```
/// use gridlock_core::{parse_commands, Command};
///
/// let commands = parse_commands("FFR")?;
/// assert_eq!(
///     commands,
///     [Command::MoveForward, Command::MoveForward, Command::TurnRight]
/// );
///
/// assert!(parse_commands("FFxR").is_err());
/// # Ok::<(), gridlock_core::CommandError>(())
/// ```
pub fn parse_commands(input: &str) -> Result<Vec<Command>, CommandError> {
    input
        .char_indices()
        .map(|(index, c)| {
            Command::from_symbol(c).ok_or(CommandError::UnrecognizedSymbol { symbol: c, index })
        })
        .collect()
}

/// The record of one executed command.
///
/// One event is appended per command a vehicle executes during a step.
/// For a nullified command (its result lay outside the field) the
/// `after` pose carries the reverted position together with whatever
/// heading the command produced, so heading changes remain visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepEvent {
    /// The step in which the command ran.
    pub step: StepId,
    /// The vehicle that executed it.
    pub vehicle: VehicleId,
    /// The command that ran.
    pub command: Command,
    /// Pose before execution.
    pub before: Pose,
    /// Pose after execution, position reverted for nullified commands.
    pub after: Pose,
    /// Whether the command was absorbed at the field boundary.
    pub nullified: bool,
}
