//! Test fixtures and scenario generators for Gridlock development.
//!
//! Compact builders that panic on invalid fixture input, one canned
//! crossing scenario with a known outcome, and a seeded random scenario
//! generator for determinism tests. Not published; workspace crates
//! pull this in as a dev-dependency.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(missing_docs)]

use std::collections::HashSet;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use gridlock_core::{Direction, Position};
use gridlock_field::{Field, Vehicle};

/// Builds a vehicle, panicking on an invalid name.
pub fn vehicle(name: &str, x: i32, y: i32, direction: Direction) -> Vehicle {
    Vehicle::new(name, Position::new(x, y), direction).expect("fixture vehicle name must be valid")
}

/// Builds a vehicle with a command script already assigned.
pub fn scripted_vehicle(
    name: &str,
    x: i32,
    y: i32,
    direction: Direction,
    script: &str,
) -> Vehicle {
    let mut vehicle = vehicle(name, x, y, direction);
    vehicle
        .set_commands(script)
        .expect("fixture script must parse");
    vehicle
}

/// Builds a field and places every vehicle through the validated path.
pub fn field_with(width: u32, height: u32, vehicles: Vec<Vehicle>) -> Field {
    let mut field = Field::new(width, height);
    for vehicle in vehicles {
        field
            .place_vehicle(vehicle)
            .expect("fixture placement must be valid");
    }
    field
}

/// The canonical two-vehicle crossing on a 10x10 field.
///
/// A starts at (1, 2) facing north, B at (7, 8) facing west; their
/// scripts collide at (5, 4) in step 7, with B as the mover.
pub fn crossing_scenario() -> Field {
    field_with(
        10,
        10,
        vec![
            scripted_vehicle("A", 1, 2, Direction::North, "FFRFFFFRRL"),
            scripted_vehicle("B", 7, 8, Direction::West, "FFLFFFFFFF"),
        ],
    )
}

/// Generates a reproducible random scenario.
///
/// Placement, headings, and scripts all come from a ChaCha8 stream
/// seeded with `seed`, so the same inputs always produce the same
/// field. Vehicles get distinct cells and names `V0`, `V1`, ...
///
/// # Panics
///
/// Panics if `vehicles` exceeds the number of cells.
pub fn random_scenario(
    width: u32,
    height: u32,
    vehicles: usize,
    script_len: usize,
    seed: u64,
) -> Field {
    assert!(
        vehicles as u64 <= u64::from(width) * u64::from(height),
        "more vehicles than cells"
    );
    const ALPHABET: [char; 3] = ['L', 'R', 'F'];

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut field = Field::new(width, height);
    let mut taken: HashSet<Position> = HashSet::new();

    for index in 0..vehicles {
        let position = loop {
            let candidate = Position::new(
                rng.random_range(0..width) as i32,
                rng.random_range(0..height) as i32,
            );
            if taken.insert(candidate) {
                break candidate;
            }
        };
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let script: String = (0..script_len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
            .collect();

        let mut vehicle = Vehicle::new(&format!("V{index}"), position, direction)
            .expect("generated names are non-empty");
        vehicle
            .set_commands(&script)
            .expect("generated scripts use the command alphabet");
        field
            .place_vehicle(vehicle)
            .expect("generated placements are distinct and in bounds");
    }

    field
}
