//! Lockstep simulation engine for the Gridlock workspace.
//!
//! Drives a [`Field`](gridlock_field::Field) of scripted vehicles to a
//! terminal outcome, one step at a time:
//!
//! - [`ScenarioConfig`] describes a start state declaratively and
//!   builds a validated field from it.
//! - [`Simulation`] owns the field and steps the fleet in insertion
//!   order, absorbing boundary moves and stopping dead on the first
//!   collision.
//! - [`RunReport`] and [`RunMetrics`] capture the result: outcome,
//!   final poses, the full event history, and per-run counters.
//!
//! The engine is single-threaded and allocation-light on the hot path;
//! determinism comes from doing the obvious thing in a fixed order, not
//! from locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod report;
pub mod sim;

pub use config::{ScenarioConfig, ScenarioError, VehicleSpec};
pub use metrics::RunMetrics;
pub use report::{RunReport, VehicleSummary};
pub use sim::{Simulation, StepStatus};
