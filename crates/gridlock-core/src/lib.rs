//! Core types for the Gridlock vehicle simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared across the workspace: compass headings and
//! their turn algebra, grid coordinates and poses, the `L`/`R`/`F`
//! command alphabet, per-command step records, and terminal run
//! outcomes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod direction;
pub mod error;
pub mod id;
pub mod outcome;
pub mod position;

pub use command::{parse_commands, Command, StepEvent};
pub use direction::Direction;
pub use error::{CommandError, DirectionError};
pub use id::{StepId, VehicleId};
pub use outcome::{CollisionEvent, RunOutcome};
pub use position::{Pose, Position};
