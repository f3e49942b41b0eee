//! Structured run reports and their text rendering.

use std::fmt;

use gridlock_core::{Pose, RunOutcome, StepEvent, VehicleId};
use gridlock_field::Origin;

use crate::metrics::RunMetrics;

/// One vehicle's final state, paired with how it entered the run.
#[derive(Clone, Debug)]
pub struct VehicleSummary {
    /// The vehicle's id (its insertion index).
    pub id: VehicleId,
    /// The vehicle's name.
    pub name: String,
    /// Where the vehicle ended up.
    pub pose: Pose,
    /// The vehicle's immutable origin record.
    pub origin: Origin,
}

impl fmt::Display for VehicleSummary {
    /// Renders the roster line, e.g. `A, (1, 2) N, FFRFFFFRRL`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.origin)
    }
}

/// Everything a caller needs to render a finished run.
///
/// Produced by [`Simulation::run`](crate::Simulation::run). The fleet
/// and the metrics' per-vehicle map share insertion order; `events`
/// holds the simulation's whole recorded history, while `metrics`
/// covers only the run that built this report.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Per-vehicle final state, in insertion order.
    pub fleet: Vec<VehicleSummary>,
    /// Every command execution recorded over the simulation's lifetime.
    pub events: Vec<StepEvent>,
    /// Counters and timing for the run that produced this report.
    pub metrics: RunMetrics,
}

impl RunReport {
    /// The summary for `id`, if that vehicle exists.
    pub fn vehicle(&self, id: VehicleId) -> Option<&VehicleSummary> {
        self.fleet.iter().find(|summary| summary.id == id)
    }

    fn vehicle_name(&self, id: VehicleId) -> &str {
        self.vehicle(id).map_or("?", |summary| summary.name.as_str())
    }
}

impl fmt::Display for RunReport {
    /// Renders the roster followed by the result block:
    ///
    /// ```text
    /// Your current list of vehicles are:
    /// - A, (1, 2) N, FFRFFFFRRL
    /// - B, (7, 8) W, FFLFFFFFFF
    ///
    /// After simulation, the result is:
    /// - B, collides with A at (5, 4) at step 7.
    /// - A, collides with B at (5, 4) at step 7.
    /// ```
    ///
    /// A collision is reported from both sides, mover first. An
    /// exhausted run lists final poses (`- A (4, 4) S`) instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your current list of vehicles are:")?;
        for summary in &self.fleet {
            writeln!(f, "- {summary}")?;
        }
        writeln!(f)?;
        write!(f, "After simulation, the result is:")?;
        match &self.outcome {
            RunOutcome::Collision(event) => {
                let mover = self.vehicle_name(event.vehicle);
                let struck = self.vehicle_name(event.other);
                write!(
                    f,
                    "\n- {mover}, collides with {struck} at {} at step {}.",
                    event.position, event.step
                )?;
                write!(
                    f,
                    "\n- {struck}, collides with {mover} at {} at step {}.",
                    event.position, event.step
                )
            }
            RunOutcome::Exhausted { .. } => {
                for summary in &self.fleet {
                    write!(f, "\n- {} {}", summary.name, summary.pose)?;
                }
                Ok(())
            }
        }
    }
}
