//! Gridlock: a deterministic lockstep vehicle simulation on a bounded grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Gridlock sub-crates. For most users, adding `gridlock` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridlock::prelude::*;
//!
//! // Describe a 10x10 field with two vehicles on a collision course.
//! let config = ScenarioConfig {
//!     width: 10,
//!     height: 10,
//!     vehicles: vec![
//!         VehicleSpec {
//!             name: "A".into(),
//!             x: 1,
//!             y: 2,
//!             direction: Direction::North,
//!             commands: "FFRFFFFRRL".into(),
//!         },
//!         VehicleSpec {
//!             name: "B".into(),
//!             x: 7,
//!             y: 8,
//!             direction: Direction::West,
//!             commands: "FFLFFFFFFF".into(),
//!         },
//!     ],
//! };
//!
//! // Validate the scenario, then run the fleet to completion.
//! let mut sim = Simulation::new(config.build().unwrap());
//! let report = sim.run();
//!
//! let collision = report.outcome.collision().expect("the scripts collide");
//! assert_eq!(collision.step, StepId(7));
//! assert_eq!(collision.position, Position::new(5, 4));
//! println!("{report}");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridlock-core` | IDs, directions, poses, commands, outcomes |
//! | [`field`] | `gridlock-field` | The bounded field and the vehicles on it |
//! | [`engine`] | `gridlock-engine` | Scenario building, lockstep stepping, reports |
//! | [`trace`] | `gridlock-trace` | Run traces, hashing, and divergence location |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`gridlock-core`).
///
/// Contains headings, positions, poses, the command alphabet, step events,
/// and run outcomes. Everything here is `Copy` apart from parse errors.
pub use gridlock_core as types;

/// Field and vehicle state (`gridlock-field`).
///
/// Provides [`field::Field`] with bounds and occupancy queries, and
/// [`field::Vehicle`] with its FIFO command queue.
pub use gridlock_field as field;

/// Simulation engine (`gridlock-engine`).
///
/// Build a start state from a [`engine::ScenarioConfig`], drive it with
/// [`engine::Simulation`], and summarize the run with [`engine::RunReport`].
pub use gridlock_engine as engine;

/// Deterministic run tracing and comparison (`gridlock-trace`).
///
/// Record runs with [`trace::TraceRecorder`], fingerprint them with
/// [`trace::trace_hash`], and locate divergences with
/// [`trace::compare_traces`].
pub use gridlock_trace as trace;

/// Common imports for typical Gridlock usage.
///
/// ```rust
/// use gridlock::prelude::*;
/// ```
///
/// This imports the most frequently used types: scenario builders, the
/// simulation driver, field and vehicle state, and the trace toolkit.
pub mod prelude {
    // Core types
    pub use gridlock_core::{
        parse_commands, CollisionEvent, Command, Direction, Pose, Position, RunOutcome, StepEvent,
        StepId, VehicleId,
    };

    // Errors
    pub use gridlock_core::{CommandError, DirectionError};
    pub use gridlock_engine::ScenarioError;
    pub use gridlock_field::{PlacementError, VehicleError};

    // Field
    pub use gridlock_field::{Field, Origin, Vehicle};

    // Engine
    pub use gridlock_engine::{
        RunMetrics, RunReport, ScenarioConfig, Simulation, StepStatus, VehicleSpec, VehicleSummary,
    };

    // Trace
    pub use gridlock_trace::{compare_traces, Divergence, RunTrace, TraceRecorder};
}
