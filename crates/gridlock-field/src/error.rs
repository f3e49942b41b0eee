//! Error types for vehicle construction and placement.

use std::error::Error;
use std::fmt;

use gridlock_core::Position;

/// Errors from [`Vehicle::new`](crate::Vehicle::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleError {
    /// The name was empty, or whitespace only.
    EmptyName,
}

impl fmt::Display for VehicleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "vehicle name must not be empty"),
        }
    }
}

impl Error for VehicleError {}

/// Errors from the validated placement path,
/// [`Field::place_vehicle`](crate::Field::place_vehicle).
///
/// Checks run in declaration order: duplicate name, then bounds, then
/// occupancy. The raw [`Field::add_vehicle`](crate::Field::add_vehicle)
/// path skips all three.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// Another vehicle already uses this name.
    DuplicateName {
        /// The contested name.
        name: String,
    },
    /// The starting position lies outside the field.
    OutOfBounds {
        /// The rejected position.
        position: Position,
    },
    /// Another vehicle already stands on the starting position.
    Occupied {
        /// The contested cell.
        position: Position,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "vehicle name '{name}' is already taken")
            }
            Self::OutOfBounds { position } => {
                write!(f, "position {position} is outside the field")
            }
            Self::Occupied { position } => {
                write!(f, "position {position} is already occupied")
            }
        }
    }
}

impl Error for PlacementError {}
