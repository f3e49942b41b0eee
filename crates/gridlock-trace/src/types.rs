//! In-memory trace data: scenario descriptors, frames, and whole runs.

use gridlock_core::{Pose, RunOutcome, StepEvent, StepId, VehicleId};
use gridlock_field::Field;
use smallvec::SmallVec;

/// How one vehicle entered the scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleDescriptor {
    /// The vehicle's id (insertion index).
    pub id: VehicleId,
    /// The vehicle's canonical name.
    pub name: String,
    /// The starting pose.
    pub origin: Pose,
    /// The raw command script.
    pub commands: String,
}

/// Everything needed to identify a scenario's start state.
///
/// Read from the fleet's immutable origin records, so capturing it
/// before, during, or after a run yields the same descriptor. Two runs
/// are only worth comparing when their descriptors match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioDescriptor {
    /// Field width in cells.
    pub width: u32,
    /// Field height in cells.
    pub height: u32,
    /// Per-vehicle origin records, in insertion order.
    pub vehicles: Vec<VehicleDescriptor>,
}

impl ScenarioDescriptor {
    /// Captures the descriptor for `field`.
    pub fn from_field(field: &Field) -> Self {
        Self {
            width: field.width(),
            height: field.height(),
            vehicles: field
                .vehicles()
                .map(|(id, vehicle)| VehicleDescriptor {
                    id,
                    name: vehicle.name().to_string(),
                    origin: vehicle.origin().pose(),
                    commands: vehicle.origin().commands().to_string(),
                })
                .collect(),
        }
    }
}

/// One step's worth of recorded command executions.
///
/// Small fleets dominate, so the event list keeps up to four events
/// inline before spilling to the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepFrame {
    /// The 1-indexed step these events belong to.
    pub step: StepId,
    /// Events in execution (insertion) order.
    pub events: SmallVec<[StepEvent; 4]>,
}

/// A complete recorded run: scenario, per-step history, and outcome.
///
/// Traces exist to be compared. Two traces of the same scenario must be
/// identical for the engine to count as deterministic; see
/// [`compare_traces`](crate::compare_traces) and
/// [`trace_hash`](crate::trace_hash).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunTrace {
    /// The scenario's start state.
    pub descriptor: ScenarioDescriptor,
    /// Per-step frames, in step order.
    pub frames: Vec<StepFrame>,
    /// How the run ended.
    pub outcome: RunOutcome,
}
