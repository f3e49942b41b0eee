//! Vehicle identity, pose, and the pending command queue.

use std::collections::VecDeque;
use std::fmt;

use gridlock_core::{parse_commands, Command, CommandError, Direction, Pose, Position};

use crate::error::VehicleError;

// ── Origin ──────────────────────────────────────────────────────

/// The immutable record of how a vehicle entered the simulation.
///
/// Captured at construction; only [`Vehicle::set_commands`] updates the
/// stored script, and stepping never touches any of it. Reports use the
/// origin to render a vehicle's roster line regardless of where it has
/// moved since.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    pose: Pose,
    commands: String,
}

impl Origin {
    /// The pose the vehicle was created with.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The raw command script most recently assigned.
    ///
    /// Empty until the first [`Vehicle::set_commands`] call succeeds.
    pub fn commands(&self) -> &str {
        &self.commands
    }
}

impl fmt::Display for Origin {
    /// Renders `(x, y) D, SCRIPT`, the tail of a roster line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.pose, self.commands)
    }
}

// ── Vehicle ─────────────────────────────────────────────────────

/// An autonomous vehicle with a name, a pose, and a script to run.
///
/// A vehicle executes commands one at a time from a FIFO queue loaded
/// by [`set_commands`](Self::set_commands). The queue only ever shrinks
/// during execution; a vehicle whose queue has drained is inert for the
/// rest of the run. Vehicles know nothing about the field they drive
/// on: a forward move happily leaves any boundary, and it is the
/// engine's job to absorb it (see
/// [`revert_position`](Self::revert_position)).
///
/// # Examples
///
/// ```
/// use gridlock_core::{Command, Direction, Position};
/// use gridlock_field::Vehicle;
///
/// let mut vehicle = Vehicle::new("A", Position::new(1, 2), Direction::North)?;
/// vehicle.set_commands("FFR")?;
///
/// assert_eq!(vehicle.execute_next_command(), Some(Command::MoveForward));
/// assert_eq!(vehicle.position(), Position::new(1, 3));
/// assert_eq!(vehicle.pending_commands(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Vehicle {
    name: String,
    pose: Pose,
    pending: VecDeque<Command>,
    origin: Origin,
}

impl Vehicle {
    /// Creates a vehicle at the given pose.
    ///
    /// The name is trimmed and stored in canonical form. No
    /// field-relative validation happens here; callers check bounds and
    /// occupancy against a [`Field`](crate::Field) before placement.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::EmptyName`] if the name is empty or
    /// whitespace only.
    pub fn new(name: &str, position: Position, direction: Direction) -> Result<Self, VehicleError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VehicleError::EmptyName);
        }
        let pose = Pose::new(position, direction);
        Ok(Self {
            name: name.to_string(),
            pose,
            pending: VecDeque::new(),
            origin: Origin {
                pose,
                commands: String::new(),
            },
        })
    }

    /// Assigns a command script, replacing any queued commands.
    ///
    /// Parsing is atomic: if any character falls outside the `L`/`R`/`F`
    /// alphabet, the whole script is rejected and the existing queue is
    /// left untouched. On success the queue is replaced wholesale (never
    /// appended to) and the raw script is stored in the origin record
    /// for reporting.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnrecognizedSymbol`] for the first
    /// character outside the command alphabet.
    pub fn set_commands(&mut self, script: &str) -> Result<(), CommandError> {
        let commands = parse_commands(script)?;
        self.pending = commands.into();
        self.origin.commands = script.to_string();
        Ok(())
    }

    /// Whether any commands remain queued. Pure.
    pub fn has_pending_commands(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of commands remaining in the queue.
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Dequeues and applies exactly one command.
    ///
    /// Turns rotate the heading in place and moves translate the
    /// position one cell along the current heading; both are total.
    /// Bounds are not this type's concern, so a forward move may leave
    /// the field. Returns the executed command so the engine can build
    /// its step record, or `None` (a no-op) if the queue is empty.
    pub fn execute_next_command(&mut self) -> Option<Command> {
        let command = self.pending.pop_front()?;
        match command {
            Command::TurnLeft => self.pose.direction = self.pose.direction.turned_left(),
            Command::TurnRight => self.pose.direction = self.pose.direction.turned_right(),
            Command::MoveForward => {
                self.pose.position = self.pose.position.translated(self.pose.direction);
            }
        }
        Some(command)
    }

    /// Moves the vehicle back to `position`, leaving the heading as is.
    ///
    /// The engine calls this to absorb a forward move that crossed the
    /// field boundary: the position reverts, but a heading change from
    /// the same step stands.
    pub fn revert_position(&mut self, position: Position) {
        self.pose.position = position;
    }

    /// The vehicle's canonical (trimmed) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.pose.position
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.pose.direction
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The immutable origin record for reporting.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}
