//! Declarative scenario configuration and validation.

use std::error::Error;
use std::fmt;

use gridlock_core::{CommandError, Direction, Position};
use gridlock_field::{Field, PlacementError, Vehicle, VehicleError};

// ── Errors ──────────────────────────────────────────────────────

/// Errors detected while building a scenario.
///
/// Every variant names the vehicle whose declaration failed. Checks run
/// in declaration order and stop at the first failure, so one build
/// reports one error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioError {
    /// The vehicle itself was rejected (for example, an empty name).
    Vehicle {
        /// Name as declared, before trimming.
        name: String,
        /// The underlying rejection.
        source: VehicleError,
    },
    /// The vehicle's command script failed to parse.
    Commands {
        /// The declared vehicle name.
        name: String,
        /// The underlying parse failure, with the offending index.
        source: CommandError,
    },
    /// The vehicle could not be placed on the field.
    Placement {
        /// The declared vehicle name.
        name: String,
        /// The underlying placement rejection.
        source: PlacementError,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vehicle { name, source } => write!(f, "vehicle '{name}': {source}"),
            Self::Commands { name, source } => write!(f, "vehicle '{name}' commands: {source}"),
            Self::Placement { name, source } => write!(f, "vehicle '{name}': {source}"),
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vehicle { source, .. } => Some(source),
            Self::Commands { source, .. } => Some(source),
            Self::Placement { source, .. } => Some(source),
        }
    }
}

// ── Configuration ───────────────────────────────────────────────

/// One vehicle declaration within a [`ScenarioConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleSpec {
    /// Vehicle name; must be non-empty after trimming, unique on the field.
    pub name: String,
    /// Starting column.
    pub x: i32,
    /// Starting row.
    pub y: i32,
    /// Starting heading.
    pub direction: Direction,
    /// Command script over the `L`/`R`/`F` alphabet.
    pub commands: String,
}

/// Complete declarative description of a simulation start state.
///
/// Field dimensions plus every vehicle's name, starting pose, and
/// command script. Declaration order matters: it becomes the fleet's
/// insertion order, which is the engine's tie-break order within a
/// step.
///
/// # Examples
///
/// ```
/// use gridlock_core::Direction;
/// use gridlock_engine::{ScenarioConfig, VehicleSpec};
///
/// let config = ScenarioConfig {
///     width: 5,
///     height: 5,
///     vehicles: vec![VehicleSpec {
///         name: "A".into(),
///         x: 1,
///         y: 2,
///         direction: Direction::North,
///         commands: "FFRFFFFRRL".into(),
///     }],
/// };
/// let field = config.build()?;
/// assert_eq!(field.vehicle_count(), 1);
/// # Ok::<(), gridlock_engine::ScenarioError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Field width in cells.
    pub width: u32,
    /// Field height in cells.
    pub height: u32,
    /// Vehicle declarations, in placement order.
    pub vehicles: Vec<VehicleSpec>,
}

impl ScenarioConfig {
    /// Builds the field this scenario describes.
    ///
    /// Vehicles are constructed, given their scripts, and placed in
    /// declaration order through the fully validated
    /// [`place_vehicle`](Field::place_vehicle) path.
    ///
    /// # Errors
    ///
    /// Returns the first declaration failure wrapped in a
    /// [`ScenarioError`] that names the offending vehicle.
    pub fn build(&self) -> Result<Field, ScenarioError> {
        let mut field = Field::new(self.width, self.height);
        for spec in &self.vehicles {
            let mut vehicle =
                Vehicle::new(&spec.name, Position::new(spec.x, spec.y), spec.direction).map_err(
                    |source| ScenarioError::Vehicle {
                        name: spec.name.clone(),
                        source,
                    },
                )?;
            vehicle
                .set_commands(&spec.commands)
                .map_err(|source| ScenarioError::Commands {
                    name: spec.name.clone(),
                    source,
                })?;
            field
                .place_vehicle(vehicle)
                .map_err(|source| ScenarioError::Placement {
                    name: spec.name.clone(),
                    source,
                })?;
        }
        Ok(field)
    }

    /// Validates the scenario without keeping the field.
    ///
    /// Runs exactly the checks [`build`](Self::build) runs; the
    /// constructed field is intentionally discarded. Useful for
    /// rejecting a scenario before the caller is ready to run it.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.build().map(|_| ())
    }
}
