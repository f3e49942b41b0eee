//! The lockstep simulation loop.
//!
//! [`Simulation`] owns a [`Field`] and advances it one step at a time.
//! A step walks the fleet once in insertion order, executing exactly
//! one queued command per vehicle; [`run`](Simulation::run) drives
//! stepping to a terminal outcome and assembles a
//! [`RunReport`](crate::RunReport).
//!
//! # Ordering model
//!
//! Insertion order is load-bearing. Vehicles execute within a step
//! strictly in the order they were placed, and a collision ends the run
//! immediately, before later vehicles in the same step get to move. The
//! first vehicle to enter an occupied cell therefore decides the
//! outcome, and reordering the fleet can change it.
//!
//! # Boundary behaviour
//!
//! A command that would leave a vehicle off the field is absorbed, not
//! rejected: the command is consumed, the position reverts, and any
//! heading change from the same command stands. Absorbed commands skip
//! collision detection, so a vehicle parked out of bounds through the
//! unvalidated [`Field::add_vehicle`] path stays inert and harmless.

use std::fmt;
use std::time::Instant;

use gridlock_core::{CollisionEvent, Pose, RunOutcome, StepEvent, StepId, VehicleId};
use gridlock_field::Field;

use crate::metrics::RunMetrics;
use crate::report::{RunReport, VehicleSummary};

// ── StepStatus ──────────────────────────────────────────────────

/// What one [`Simulation::step`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// A full pass ran with no terminal condition; stepping can continue.
    Advanced,
    /// Two vehicles met and the simulation is over. Repeated calls keep
    /// returning the same latched event.
    Collision(CollisionEvent),
    /// No vehicle has commands queued; nothing ran and the step counter
    /// did not move.
    Exhausted,
}

// ── Simulation ──────────────────────────────────────────────────

/// Turn-based simulation over a field of scripted vehicles.
///
/// Deterministic by construction: single-threaded, no randomness, no
/// dependence on iteration order beyond the fleet's own insertion
/// order. Running the same field twice produces identical step events,
/// outcomes, and final poses.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Direction, Position, RunOutcome, StepId};
/// use gridlock_engine::Simulation;
/// use gridlock_field::{Field, Vehicle};
///
/// let mut field = Field::new(5, 5);
/// let mut vehicle = Vehicle::new("A", Position::new(1, 2), Direction::North)?;
/// vehicle.set_commands("FFRFFFFRRL")?;
/// field.place_vehicle(vehicle)?;
///
/// let mut sim = Simulation::new(field);
/// let report = sim.run();
///
/// assert_eq!(report.outcome, RunOutcome::Exhausted { steps: StepId(10) });
/// assert_eq!(report.fleet[0].pose.position, Position::new(4, 4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Simulation {
    field: Field,
    current_step: StepId,
    events: Vec<StepEvent>,
    collision: Option<CollisionEvent>,
}

impl Simulation {
    /// Creates a simulation over `field`, taking ownership of it.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            current_step: StepId(0),
            events: Vec::new(),
            collision: None,
        }
    }

    /// Executes one simulation step.
    ///
    /// Walks the fleet once in insertion order, executing exactly one
    /// command per vehicle that still has any queued. Steps are
    /// 1-indexed; a call that executes nothing (drained queues or a
    /// latched collision) leaves the counter untouched.
    pub fn step(&mut self) -> StepStatus {
        // 1. A collided simulation is over; report the latched event.
        if let Some(event) = self.collision {
            return StepStatus::Collision(event);
        }

        // 2. Nothing queued anywhere: the step does not count.
        if !self.field.has_pending_commands() {
            return StepStatus::Exhausted;
        }

        self.current_step = StepId(self.current_step.0 + 1);
        let step = self.current_step;

        // 3. One command per vehicle, in insertion order.
        for index in 0..self.field.vehicle_count() {
            let id = VehicleId(index as u32);
            let (before, command, after) = {
                let Some(vehicle) = self.field.vehicle_mut(id) else {
                    continue;
                };
                let before = vehicle.pose();
                // An empty queue is inert, not an error.
                let Some(command) = vehicle.execute_next_command() else {
                    continue;
                };
                (before, command, vehicle.pose())
            };

            if self.field.is_within_bounds(after.position) {
                self.events.push(StepEvent {
                    step,
                    vehicle: id,
                    command,
                    before,
                    after,
                    nullified: false,
                });

                // 4. Check contact immediately: the run ends mid-step,
                //    before later vehicles get to move.
                if let Some(other) = self.field.detect_collision(id) {
                    let event = CollisionEvent {
                        step,
                        vehicle: id,
                        other,
                        position: after.position,
                    };
                    self.collision = Some(event);
                    return StepStatus::Collision(event);
                }
            } else {
                // 5. Absorb the move: the position reverts, a heading
                //    change stands, and the command stays consumed.
                if let Some(vehicle) = self.field.vehicle_mut(id) {
                    vehicle.revert_position(before.position);
                }
                self.events.push(StepEvent {
                    step,
                    vehicle: id,
                    command,
                    before,
                    after: Pose::new(before.position, after.direction),
                    nullified: true,
                });
            }
        }

        StepStatus::Advanced
    }

    /// Drives the simulation to a terminal outcome and reports it.
    ///
    /// Steps until a collision latches or every queue drains, then
    /// assembles the final fleet state, the event history, and metrics
    /// covering this call. The step count in
    /// [`RunOutcome::Exhausted`] is likewise local to this call:
    /// re-running a drained simulation reports `Exhausted` after zero
    /// steps, and re-running a collided one reports the latched
    /// collision again.
    pub fn run(&mut self) -> RunReport {
        let started = Instant::now();
        let step_before = self.current_step;
        let first_event = self.events.len();

        let outcome = loop {
            match self.step() {
                StepStatus::Advanced => {}
                StepStatus::Collision(event) => break RunOutcome::Collision(event),
                StepStatus::Exhausted => {
                    break RunOutcome::Exhausted {
                        steps: StepId(self.current_step.0 - step_before.0),
                    };
                }
            }
        };

        let metrics = RunMetrics::collect(
            &self.field,
            &self.events[first_event..],
            self.current_step.0 - step_before.0,
            started.elapsed().as_micros() as u64,
        );
        let fleet = self
            .field
            .vehicles()
            .map(|(id, vehicle)| VehicleSummary {
                id,
                name: vehicle.name().to_string(),
                pose: vehicle.pose(),
                origin: vehicle.origin().clone(),
            })
            .collect();

        RunReport {
            outcome,
            fleet,
            events: self.events.clone(),
            metrics,
        }
    }

    /// The number of the most recently executed step, 0 before any.
    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    /// The latched collision, if the simulation has ended in one.
    pub fn collision(&self) -> Option<CollisionEvent> {
        self.collision
    }

    /// The field being simulated.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Consumes the simulation and returns the field in its final state.
    pub fn into_field(self) -> Field {
        self.field
    }

    /// Every command execution so far, in execution order.
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("current_step", &self.current_step)
            .field("vehicles", &self.field.vehicle_count())
            .field("events", &self.events.len())
            .field("collided", &self.collision.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::{Command, Direction, Position};
    use gridlock_field::Vehicle;
    use proptest::prelude::*;

    fn scripted(name: &str, x: i32, y: i32, direction: Direction, script: &str) -> Vehicle {
        let mut vehicle = Vehicle::new(name, Position::new(x, y), direction).unwrap();
        vehicle.set_commands(script).unwrap();
        vehicle
    }

    #[test]
    fn new_simulation_starts_at_step_zero() {
        let sim = Simulation::new(Field::new(5, 5));
        assert_eq!(sim.current_step(), StepId(0));
        assert!(sim.events().is_empty());
        assert!(sim.collision().is_none());
    }

    #[test]
    fn empty_field_is_exhausted_immediately() {
        let mut sim = Simulation::new(Field::new(5, 5));
        assert_eq!(sim.step(), StepStatus::Exhausted);
        assert_eq!(sim.current_step(), StepId(0));
    }

    #[test]
    fn vehicles_without_scripts_are_inert() {
        let mut field = Field::new(5, 5);
        field
            .place_vehicle(Vehicle::new("A", Position::new(1, 1), Direction::North).unwrap())
            .unwrap();
        let mut sim = Simulation::new(field);

        assert_eq!(sim.step(), StepStatus::Exhausted);
        assert_eq!(sim.field().vehicle(VehicleId(0)).unwrap().position(), Position::new(1, 1));
    }

    #[test]
    fn each_step_consumes_one_command_per_vehicle() {
        let mut field = Field::new(10, 10);
        field.place_vehicle(scripted("A", 0, 0, Direction::North, "FFF")).unwrap();
        field.place_vehicle(scripted("B", 5, 5, Direction::East, "F")).unwrap();
        let mut sim = Simulation::new(field);

        assert_eq!(sim.step(), StepStatus::Advanced);
        assert_eq!(sim.current_step(), StepId(1));
        let field = sim.field();
        assert_eq!(field.vehicle(VehicleId(0)).unwrap().position(), Position::new(0, 1));
        assert_eq!(field.vehicle(VehicleId(0)).unwrap().pending_commands(), 2);
        assert_eq!(field.vehicle(VehicleId(1)).unwrap().position(), Position::new(6, 5));
        assert_eq!(field.vehicle(VehicleId(1)).unwrap().pending_commands(), 0);
    }

    #[test]
    fn boundary_moves_are_absorbed_and_consumed() {
        let mut field = Field::new(3, 3);
        field.place_vehicle(scripted("A", 0, 0, Direction::West, "FLF")).unwrap();
        let mut sim = Simulation::new(field);
        let report = sim.run();

        // F is absorbed at x = -1, L faces south, F is absorbed at y = -1.
        assert_eq!(report.outcome, RunOutcome::Exhausted { steps: StepId(3) });
        let a = &report.fleet[0];
        assert_eq!(a.pose, Pose::new(Position::new(0, 0), Direction::South));
        assert_eq!(report.metrics.nullified_moves, 2);
        assert_eq!(report.metrics.turns, 1);
        assert_eq!(report.metrics.forward_moves, 0);
        assert!(report.events[0].nullified);
        assert!(!report.events[1].nullified);
        assert!(report.events[2].nullified);
    }

    #[test]
    fn absorbed_moves_keep_the_heading_change() {
        let mut field = Field::new(3, 3);
        // Parked off the field through the unvalidated path.
        field.add_vehicle(scripted("A", 9, 9, Direction::North, "L"));
        let mut sim = Simulation::new(field);

        assert_eq!(sim.step(), StepStatus::Advanced);
        let vehicle = sim.field().vehicle(VehicleId(0)).unwrap();
        // The turn stands even though the vehicle sits out of bounds.
        assert_eq!(vehicle.pose(), Pose::new(Position::new(9, 9), Direction::West));
        assert!(sim.events()[0].nullified);
    }

    #[test]
    fn out_of_bounds_vehicles_never_trigger_collisions() {
        let mut field = Field::new(3, 3);
        // Two overlapping vehicles parked off the field.
        field.add_vehicle(scripted("A", 9, 9, Direction::North, "F"));
        field.add_vehicle(scripted("B", 9, 9, Direction::North, "L"));
        let mut sim = Simulation::new(field);

        assert_eq!(sim.step(), StepStatus::Advanced);
        assert_eq!(sim.step(), StepStatus::Exhausted);
        assert!(sim.collision().is_none());
    }

    #[test]
    fn overlap_on_the_field_collides_on_the_first_move() {
        let mut field = Field::new(5, 5);
        field.add_vehicle(scripted("A", 2, 2, Direction::North, "L"));
        field.add_vehicle(scripted("B", 2, 2, Direction::North, "L"));
        let mut sim = Simulation::new(field);

        // A's turn lands in bounds and immediately detects B underneath.
        let status = sim.step();
        assert_eq!(
            status,
            StepStatus::Collision(CollisionEvent {
                step: StepId(1),
                vehicle: VehicleId(0),
                other: VehicleId(1),
                position: Position::new(2, 2),
            })
        );
    }

    #[test]
    fn collision_latches_and_freezes_the_field() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(scripted("A", 0, 0, Direction::East, "FF")).unwrap();
        field.place_vehicle(scripted("B", 2, 0, Direction::West, "FF")).unwrap();
        let mut sim = Simulation::new(field);

        // Step 1: A moves to (1, 0); B moves onto it.
        let first = sim.step();
        let StepStatus::Collision(event) = first else {
            panic!("expected a collision, got {first:?}");
        };
        assert_eq!(event.step, StepId(1));
        assert_eq!(event.vehicle, VehicleId(1));
        assert_eq!(event.other, VehicleId(0));
        assert_eq!(event.position, Position::new(1, 0));

        // Further stepping is inert and keeps reporting the same event.
        let events_before = sim.events().len();
        assert_eq!(sim.step(), StepStatus::Collision(event));
        assert_eq!(sim.events().len(), events_before);
        assert_eq!(sim.field().vehicle(VehicleId(0)).unwrap().pending_commands(), 1);
    }

    #[test]
    fn rerun_of_a_drained_simulation_reports_zero_steps() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(scripted("A", 2, 2, Direction::North, "LL")).unwrap();
        let mut sim = Simulation::new(field);

        let first = sim.run();
        assert_eq!(first.outcome, RunOutcome::Exhausted { steps: StepId(2) });

        let second = sim.run();
        assert_eq!(second.outcome, RunOutcome::Exhausted { steps: StepId(0) });
        assert_eq!(second.metrics.commands_executed, 0);
        // The report still carries the full history.
        assert_eq!(second.events.len(), 2);
        assert_eq!(sim.current_step(), StepId(2));
    }

    #[test]
    fn events_record_before_and_after_poses() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(scripted("A", 1, 1, Direction::North, "FR")).unwrap();
        let mut sim = Simulation::new(field);
        sim.run();

        let events = sim.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].step, StepId(1));
        assert_eq!(events[0].command, Command::MoveForward);
        assert_eq!(events[0].before, Pose::new(Position::new(1, 1), Direction::North));
        assert_eq!(events[0].after, Pose::new(Position::new(1, 2), Direction::North));
        assert_eq!(events[1].step, StepId(2));
        assert_eq!(events[1].command, Command::TurnRight);
        assert_eq!(events[1].after, Pose::new(Position::new(1, 2), Direction::East));
    }

    #[test]
    fn into_field_returns_the_final_state() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(scripted("A", 0, 0, Direction::North, "F")).unwrap();
        let mut sim = Simulation::new(field);
        sim.run();

        let field = sim.into_field();
        assert_eq!(field.vehicle(VehicleId(0)).unwrap().position(), Position::new(0, 1));
    }

    proptest! {
        #[test]
        fn turn_scripts_exhaust_after_script_length(script in "[LR]{0,32}") {
            let mut field = Field::new(5, 5);
            field
                .place_vehicle(scripted("A", 2, 2, Direction::North, &script))
                .unwrap();
            let mut sim = Simulation::new(field);
            let report = sim.run();

            prop_assert_eq!(
                report.outcome,
                RunOutcome::Exhausted { steps: StepId(script.len() as u64) }
            );
            prop_assert_eq!(report.fleet[0].pose.position, Position::new(2, 2));
            prop_assert_eq!(report.metrics.turns, script.len() as u64);
        }
    }
}
