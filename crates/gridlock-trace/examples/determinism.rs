//! Determinism check: run one seeded scenario twice and prove the runs
//! are identical, then show what a divergence report looks like.
//!
//! Run with:
//!
//!   cargo run --example determinism

use gridlock_engine::Simulation;
use gridlock_test_utils::random_scenario;
use gridlock_trace::{compare_traces, trace_hash, RunTrace};

fn trace_run(field: gridlock_field::Field) -> RunTrace {
    let mut sim = Simulation::new(field);
    let report = sim.run();
    RunTrace::from_run(sim.field(), sim.events(), report.outcome)
}

fn main() {
    // 1. Build the same seeded scenario twice and run both.
    let seed = 7;
    let first = trace_run(random_scenario(12, 12, 6, 24, seed));
    let second = trace_run(random_scenario(12, 12, 6, 24, seed));

    println!("seed {seed}:");
    println!("  first  hash {:#018x}", trace_hash(&first));
    println!("  second hash {:#018x}", trace_hash(&second));
    match compare_traces(&first, &second) {
        Ok(()) => println!("  runs are identical ({} frames)", first.frames.len()),
        Err(divergence) => println!("  UNEXPECTED divergence: {divergence}"),
    }

    // 2. Tamper with one recorded event and compare again. The report
    //    names the exact step and event instead of a bare "not equal".
    let mut tampered = second.clone();
    if let Some(frame) = tampered.frames.get_mut(1) {
        if let Some(event) = frame.events.get_mut(0) {
            event.nullified = !event.nullified;
        }
    }

    println!("\nafter tampering with step 2:");
    match compare_traces(&first, &tampered) {
        Ok(()) => println!("  traces still compare equal"),
        Err(divergence) => println!("  divergence: {divergence}"),
    }

    // 3. A different seed is a different scenario; the descriptor check
    //    catches it before any frames are compared.
    let other = trace_run(random_scenario(12, 12, 6, 24, seed + 1));
    println!("\nagainst seed {}:", seed + 1);
    match compare_traces(&first, &other) {
        Ok(()) => println!("  traces compare equal"),
        Err(divergence) => println!("  divergence: {divergence}"),
    }
}
