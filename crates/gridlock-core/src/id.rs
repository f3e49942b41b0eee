//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a vehicle within a field.
///
/// Vehicles are assigned sequential IDs as they are added:
/// `VehicleId(n)` is the n-th vehicle placed on the field. The numeric
/// order doubles as the tie-break order for stepping and collision
/// detection, so IDs are comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VehicleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter.
///
/// Steps are 1-indexed: `StepId(0)` means no step has run yet, and the
/// first step of a simulation is `StepId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_id_ordering_follows_numeric_order() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(VehicleId(7) > VehicleId(2));
    }

    #[test]
    fn display_renders_raw_value() {
        assert_eq!(VehicleId(3).to_string(), "3");
        assert_eq!(StepId(42).to_string(), "42");
    }

    #[test]
    fn from_impls_wrap_values() {
        assert_eq!(VehicleId::from(5), VehicleId(5));
        assert_eq!(StepId::from(9), StepId(9));
    }
}
