//! Per-run execution counters.

use gridlock_core::{Command, StepEvent, VehicleId};
use gridlock_field::Field;
use indexmap::IndexMap;

/// Counters and timing collected over one [`run`] call.
///
/// All counts cover only the run that produced them: re-running a
/// drained simulation yields a report whose metrics are zero. The
/// per-vehicle map is keyed in fleet (insertion) order and carries an
/// entry for every vehicle, including those that never executed a
/// command.
///
/// [`run`]: crate::Simulation::run
#[derive(Clone, Debug, Default)]
pub struct RunMetrics {
    /// Wall-clock duration of the run, in microseconds.
    pub total_us: u64,
    /// Steps executed.
    pub steps: u64,
    /// Commands executed across the fleet.
    pub commands_executed: u64,
    /// Forward commands whose move stood.
    pub forward_moves: u64,
    /// Turn commands that rotated a vehicle on the field.
    pub turns: u64,
    /// Commands absorbed at the boundary (position reverted).
    pub nullified_moves: u64,
    /// Commands executed per vehicle, in fleet order.
    pub per_vehicle_commands: IndexMap<VehicleId, u64>,
}

impl RunMetrics {
    /// Tallies one run's event slice against the fleet.
    pub(crate) fn collect(field: &Field, events: &[StepEvent], steps: u64, total_us: u64) -> Self {
        let mut per_vehicle_commands: IndexMap<VehicleId, u64> =
            field.vehicles().map(|(id, _)| (id, 0)).collect();
        let mut forward_moves = 0;
        let mut turns = 0;
        let mut nullified_moves = 0;

        for event in events {
            if event.nullified {
                nullified_moves += 1;
            } else if event.command == Command::MoveForward {
                forward_moves += 1;
            } else {
                turns += 1;
            }
            if let Some(count) = per_vehicle_commands.get_mut(&event.vehicle) {
                *count += 1;
            }
        }

        Self {
            total_us,
            steps,
            commands_executed: events.len() as u64,
            forward_moves,
            turns,
            nullified_moves,
            per_vehicle_commands,
        }
    }
}
