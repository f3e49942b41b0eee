//! Terminal run outcomes.

use crate::id::{StepId, VehicleId};
use crate::position::Position;

/// The contact record that ends a run.
///
/// Detection is ordered: `vehicle` is the mover whose command triggered
/// the check, `other` is the vehicle that already occupied the cell.
/// Both survive with their final poses; only the run stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    /// The step in which contact happened.
    pub step: StepId,
    /// The vehicle whose command caused the contact.
    pub vehicle: VehicleId,
    /// The vehicle that was struck.
    pub other: VehicleId,
    /// The shared cell.
    pub position: Position,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Two vehicles met in the same cell; the run stopped mid-step.
    Collision(CollisionEvent),
    /// Every command queue drained without contact.
    Exhausted {
        /// How many steps this run executed. Zero when the simulation
        /// was already drained before the run started.
        steps: StepId,
    },
}

impl RunOutcome {
    /// The collision record, if the run ended in contact.
    #[must_use]
    pub fn collision(&self) -> Option<&CollisionEvent> {
        match self {
            Self::Collision(event) => Some(event),
            Self::Exhausted { .. } => None,
        }
    }

    /// Whether the run drained every queue without contact.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_accessor_distinguishes_outcomes() {
        let event = CollisionEvent {
            step: StepId(7),
            vehicle: VehicleId(1),
            other: VehicleId(0),
            position: Position::new(5, 4),
        };
        let collided = RunOutcome::Collision(event);
        let drained = RunOutcome::Exhausted { steps: StepId(10) };

        assert_eq!(collided.collision(), Some(&event));
        assert!(!collided.is_exhausted());
        assert_eq!(drained.collision(), None);
        assert!(drained.is_exhausted());
    }
}
