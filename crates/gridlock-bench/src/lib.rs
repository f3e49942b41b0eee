//! Benchmark profiles and utilities for the Gridlock simulation
//! workspace.
//!
//! Provides pre-built [`ScenarioConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`reference_profile`]: 64x64 field, 16 vehicles, 48-command scripts
//! - [`stress_profile`]: 256x256 field, 64 vehicles, 192-command scripts
//! - [`init_vehicle_positions`]: deterministic vehicle placement via seed
//!
//! Scripts are collision-free oscillation loops, so a run always drains
//! every queue: the measured work is the whole stepping loop rather
//! than an early termination at some seed-dependent step.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridlock_core::{Direction, Position};
use gridlock_engine::{ScenarioConfig, VehicleSpec};

/// One oscillation cycle: out, turn back, return, turn out again.
///
/// Net displacement zero, so a vehicle never strays more than one cell
/// from where it started, staying within its own row.
const CYCLE: &str = "FRRFLL";

/// Build the reference benchmark profile: 64x64 field, 16 vehicles.
///
/// Every vehicle runs 8 oscillation cycles (48 commands), so a full run
/// executes 768 commands over 48 steps.
pub fn reference_profile(seed: u64) -> ScenarioConfig {
    profile(64, 64, 16, 8, seed)
}

/// Build the stress benchmark profile: 256x256 field, 64 vehicles.
///
/// Same shape as [`reference_profile`] at 16x the cell count, with
/// 192-command scripts (12,288 commands per run).
pub fn stress_profile(seed: u64) -> ScenarioConfig {
    profile(256, 256, 64, 32, seed)
}

/// Generate deterministic initial vehicle positions.
///
/// Spreads `count` vehicles over the field one stride apart in
/// row-major rank, starting from a seed-derived offset. The stride is
/// `cells / count`; the built-in profiles pick dimensions where that is
/// a whole number of rows, which keeps oscillating vehicles out of each
/// other's reach.
///
/// # Panics
///
/// Panics if `count` is zero or exceeds the cell count.
pub fn init_vehicle_positions(width: u32, height: u32, count: u32, seed: u64) -> Vec<Position> {
    let cells = u64::from(width) * u64::from(height);
    assert!(count > 0 && u64::from(count) <= cells, "count must fit the field");
    let stride = cells / u64::from(count);
    let offset = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
        % cells;

    (0..u64::from(count))
        .map(|index| {
            let rank = (offset + index * stride) % cells;
            Position::new(
                (rank % u64::from(width)) as i32,
                (rank / u64::from(width)) as i32,
            )
        })
        .collect()
}

fn profile(width: u32, height: u32, count: u32, cycles: usize, seed: u64) -> ScenarioConfig {
    let vehicles = init_vehicle_positions(width, height, count, seed)
        .into_iter()
        .enumerate()
        .map(|(index, position)| VehicleSpec {
            name: format!("V{index}"),
            x: position.x,
            y: position.y,
            direction: Direction::East,
            commands: CYCLE.repeat(cycles),
        })
        .collect();

    ScenarioConfig {
        width,
        height,
        vehicles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::{RunOutcome, StepId};
    use gridlock_engine::Simulation;
    use std::collections::HashSet;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn init_vehicle_positions_no_collisions() {
        let positions = init_vehicle_positions(64, 64, 16, 42);
        assert_eq!(positions.len(), 16);

        let unique: HashSet<Position> = positions.iter().copied().collect();
        assert_eq!(unique.len(), 16, "all positions should be unique");

        for position in &positions {
            assert!(position.x >= 0 && position.x < 64);
            assert!(position.y >= 0 && position.y < 64);
        }
    }

    #[test]
    fn init_vehicle_positions_deterministic() {
        let a = init_vehicle_positions(256, 256, 64, 42);
        let b = init_vehicle_positions(256, 256, 64, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn reference_runs_drain_without_collisions() {
        let field = reference_profile(42).build().unwrap();
        let mut sim = Simulation::new(field);
        let report = sim.run();

        assert_eq!(report.outcome, RunOutcome::Exhausted { steps: StepId(48) });
        assert_eq!(report.metrics.commands_executed, 768);
    }
}
