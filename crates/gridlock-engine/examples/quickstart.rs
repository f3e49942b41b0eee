//! Gridlock quickstart: a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!
//!   1. Describing a scenario (field dimensions, vehicles, scripts)
//!   2. Building a validated field from it
//!   3. Stepping manually and watching step statuses
//!   4. Running to the terminal outcome
//!   5. Reading the report, metrics, and event history
//!
//! Run with:
//!
//!   cargo run --example quickstart

use gridlock_core::{Direction, RunOutcome};
use gridlock_engine::{ScenarioConfig, Simulation, StepStatus, VehicleSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gridlock quickstart ===\n");

    // 1. Describe the scenario. Two vehicles on a 10x10 field whose
    //    paths cross: A drives north then east, B drives west then
    //    south, straight into A's lane.
    let config = ScenarioConfig {
        width: 10,
        height: 10,
        vehicles: vec![
            VehicleSpec {
                name: "A".into(),
                x: 1,
                y: 2,
                direction: Direction::North,
                commands: "FFRFFFFRRL".into(),
            },
            VehicleSpec {
                name: "B".into(),
                x: 7,
                y: 8,
                direction: Direction::West,
                commands: "FFLFFFFFFF".into(),
            },
        ],
    };
    println!(
        "Scenario: {}x{} field, {} vehicles",
        config.width,
        config.height,
        config.vehicles.len()
    );

    // 2. Build the validated field. Bad names, bad scripts, and bad
    //    placements all surface here, before anything moves.
    let field = config.build()?;
    for (id, vehicle) in field.vehicles() {
        println!("  #{id}: {}, {}", vehicle.name(), vehicle.origin());
    }

    // 3. Step manually for a few turns to watch the lockstep loop.
    let mut sim = Simulation::new(field);
    println!("\nStepping:");
    for _ in 0..3 {
        match sim.step() {
            StepStatus::Advanced => {
                let poses: Vec<String> = sim
                    .field()
                    .vehicles()
                    .map(|(_, v)| format!("{} {}", v.name(), v.pose()))
                    .collect();
                println!("  step {}: {}", sim.current_step(), poses.join(" | "));
            }
            StepStatus::Collision(event) => {
                println!("  collision at {} in step {}", event.position, event.step);
                break;
            }
            StepStatus::Exhausted => {
                println!("  all scripts drained");
                break;
            }
        }
    }

    // 4. Run the rest to the terminal outcome.
    let report = sim.run();
    match report.outcome {
        RunOutcome::Collision(event) => println!(
            "\nOutcome: collision at {} in step {}",
            event.position, event.step
        ),
        RunOutcome::Exhausted { steps } => {
            println!("\nOutcome: exhausted after {steps} more steps");
        }
    }

    // 5. The report renders the roster and result lines directly.
    println!("\n{report}\n");
    println!(
        "Metrics: {} steps, {} commands ({} forward, {} turns, {} absorbed) in {} us",
        report.metrics.steps,
        report.metrics.commands_executed,
        report.metrics.forward_moves,
        report.metrics.turns,
        report.metrics.nullified_moves,
        report.metrics.total_us
    );

    println!("\nLast three events:");
    for event in report.events.iter().rev().take(3).rev() {
        println!(
            "  step {}: vehicle {} ran {} ({} -> {}){}",
            event.step,
            event.vehicle,
            event.command,
            event.before,
            event.after,
            if event.nullified { " [absorbed]" } else { "" }
        );
    }

    Ok(())
}
