//! The bounded field and its insertion-ordered fleet.

use gridlock_core::{Position, VehicleId};

use crate::error::PlacementError;
use crate::vehicle::Vehicle;

/// A rectangular driving surface of `width * height` cells.
///
/// Coordinates are Cartesian: `(0, 0)` is the bottom-left cell and
/// `(width - 1, height - 1)` the top-right. The fleet is stored in
/// insertion order and a [`VehicleId`] is simply the vehicle's index in
/// it; that order doubles as the tie-break order for stepping, so two
/// fields holding the same vehicles in a different order are different
/// scenarios.
///
/// Construction never fails. A zero-area field is legal and simply has
/// no in-bounds cell.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Direction, Position};
/// use gridlock_field::{Field, Vehicle};
///
/// let mut field = Field::new(10, 10);
/// let id = field.place_vehicle(Vehicle::new(
///     "A",
///     Position::new(1, 2),
///     Direction::North,
/// )?)?;
///
/// assert_eq!(field.vehicle(id).unwrap().name(), "A");
/// assert!(field.is_within_bounds(Position::new(9, 9)));
/// assert!(!field.is_within_bounds(Position::new(10, 0)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    width: u32,
    height: u32,
    vehicles: Vec<Vehicle>,
}

impl Field {
    /// Creates an empty field of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            vehicles: Vec::new(),
        }
    }

    /// Field width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `position` lies on the field.
    ///
    /// Total over all of `i32 * i32`; negative coordinates are simply
    /// out of bounds, never an error.
    pub fn is_within_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Whether any vehicle currently occupies `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.vehicles
            .iter()
            .any(|vehicle| vehicle.position() == position)
    }

    /// Adds a vehicle without placement validation.
    ///
    /// No bounds, occupancy, or name checks: this is the raw insertion
    /// used by tooling that wants to set up an arbitrary (even broken)
    /// fleet. Scenario construction goes through
    /// [`place_vehicle`](Self::place_vehicle) instead.
    ///
    /// # Panics
    ///
    /// Panics if the fleet would exceed `u32::MAX` vehicles.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> VehicleId {
        let id = VehicleId(u32::try_from(self.vehicles.len()).expect("fleet count fits in u32"));
        self.vehicles.push(vehicle);
        id
    }

    /// Adds a vehicle with full placement validation.
    ///
    /// Checks run in a fixed order and stop at the first failure: the
    /// name must be unused, the position on the field, and the cell
    /// free.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::DuplicateName`],
    /// [`PlacementError::OutOfBounds`], or [`PlacementError::Occupied`]
    /// accordingly. The vehicle is dropped on failure; the field is
    /// unchanged.
    pub fn place_vehicle(&mut self, vehicle: Vehicle) -> Result<VehicleId, PlacementError> {
        if self.vehicles.iter().any(|v| v.name() == vehicle.name()) {
            return Err(PlacementError::DuplicateName {
                name: vehicle.name().to_string(),
            });
        }
        let position = vehicle.position();
        if !self.is_within_bounds(position) {
            return Err(PlacementError::OutOfBounds { position });
        }
        if self.is_occupied(position) {
            return Err(PlacementError::Occupied { position });
        }
        Ok(self.add_vehicle(vehicle))
    }

    /// Finds the first other vehicle sharing `subject`'s cell.
    ///
    /// Scans the fleet in insertion order and skips the subject itself,
    /// so when several vehicles pile onto one cell the earliest-placed
    /// other one is reported. Returns `None` for an unknown id.
    pub fn detect_collision(&self, subject: VehicleId) -> Option<VehicleId> {
        let position = self.vehicle(subject)?.position();
        self.vehicles.iter().enumerate().find_map(|(index, other)| {
            let id = VehicleId(index as u32);
            (id != subject && other.position() == position).then_some(id)
        })
    }

    /// The fleet in insertion order, with ids.
    pub fn vehicles(&self) -> impl Iterator<Item = (VehicleId, &Vehicle)> {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(index, vehicle)| (VehicleId(index as u32), vehicle))
    }

    /// The vehicle with the given id, if any.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.0 as usize)
    }

    /// Mutable access to the vehicle with the given id, if any.
    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.0 as usize)
    }

    /// Number of vehicles on the field.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether any vehicle still has commands queued.
    pub fn has_pending_commands(&self) -> bool {
        self.vehicles.iter().any(Vehicle::has_pending_commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::Direction;
    use proptest::prelude::*;

    fn vehicle(name: &str, x: i32, y: i32) -> Vehicle {
        Vehicle::new(name, Position::new(x, y), Direction::North).unwrap()
    }

    #[test]
    fn new_field_is_empty() {
        let field = Field::new(8, 6);
        assert_eq!(field.width(), 8);
        assert_eq!(field.height(), 6);
        assert_eq!(field.vehicle_count(), 0);
        assert!(!field.has_pending_commands());
    }

    #[test]
    fn zero_area_fields_have_no_in_bounds_cell() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let field = Field::new(w, h);
            assert!(!field.is_within_bounds(Position::new(0, 0)), "{w}x{h}");
        }
    }

    #[test]
    fn bounds_are_inclusive_of_origin_and_exclusive_of_extent() {
        let field = Field::new(10, 10);
        assert!(field.is_within_bounds(Position::new(0, 0)));
        assert!(field.is_within_bounds(Position::new(9, 9)));
        assert!(!field.is_within_bounds(Position::new(10, 9)));
        assert!(!field.is_within_bounds(Position::new(9, 10)));
        assert!(!field.is_within_bounds(Position::new(-1, 0)));
        assert!(!field.is_within_bounds(Position::new(0, -1)));
    }

    #[test]
    fn add_vehicle_assigns_sequential_ids() {
        let mut field = Field::new(5, 5);
        assert_eq!(field.add_vehicle(vehicle("A", 0, 0)), VehicleId(0));
        assert_eq!(field.add_vehicle(vehicle("B", 1, 0)), VehicleId(1));
        assert_eq!(field.add_vehicle(vehicle("C", 2, 0)), VehicleId(2));
        assert_eq!(field.vehicle_count(), 3);
    }

    #[test]
    fn add_vehicle_skips_all_validation() {
        let mut field = Field::new(3, 3);
        // Same name, same cell, and out of bounds are all accepted raw.
        field.add_vehicle(vehicle("A", 1, 1));
        field.add_vehicle(vehicle("A", 1, 1));
        field.add_vehicle(vehicle("B", 9, 9));
        assert_eq!(field.vehicle_count(), 3);
    }

    #[test]
    fn place_vehicle_accepts_a_valid_placement() {
        let mut field = Field::new(5, 5);
        let id = field.place_vehicle(vehicle("A", 2, 3)).unwrap();
        assert_eq!(id, VehicleId(0));
        assert!(field.is_occupied(Position::new(2, 3)));
    }

    #[test]
    fn place_vehicle_rejects_duplicate_names() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(vehicle("A", 0, 0)).unwrap();
        let err = field.place_vehicle(vehicle("A", 1, 1)).unwrap_err();
        assert_eq!(
            err,
            PlacementError::DuplicateName {
                name: "A".to_string()
            }
        );
        assert_eq!(field.vehicle_count(), 1);
    }

    #[test]
    fn place_vehicle_rejects_out_of_bounds_positions() {
        let mut field = Field::new(5, 5);
        let err = field.place_vehicle(vehicle("A", 5, 0)).unwrap_err();
        assert_eq!(
            err,
            PlacementError::OutOfBounds {
                position: Position::new(5, 0)
            }
        );
    }

    #[test]
    fn place_vehicle_rejects_occupied_cells() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(vehicle("A", 2, 2)).unwrap();
        let err = field.place_vehicle(vehicle("B", 2, 2)).unwrap_err();
        assert_eq!(
            err,
            PlacementError::Occupied {
                position: Position::new(2, 2)
            }
        );
    }

    #[test]
    fn duplicate_name_wins_over_later_checks() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(vehicle("A", 0, 0)).unwrap();
        // Also out of bounds, but the name check runs first.
        let err = field.place_vehicle(vehicle("A", 99, 99)).unwrap_err();
        assert!(matches!(err, PlacementError::DuplicateName { .. }));
    }

    #[test]
    fn detect_collision_reports_the_earliest_other_occupant() {
        let mut field = Field::new(5, 5);
        let a = field.add_vehicle(vehicle("A", 2, 2));
        let b = field.add_vehicle(vehicle("B", 2, 2));
        let c = field.add_vehicle(vehicle("C", 2, 2));

        assert_eq!(field.detect_collision(a), Some(b));
        assert_eq!(field.detect_collision(b), Some(a));
        assert_eq!(field.detect_collision(c), Some(a));
    }

    #[test]
    fn detect_collision_ignores_lone_vehicles_and_unknown_ids() {
        let mut field = Field::new(5, 5);
        let a = field.place_vehicle(vehicle("A", 1, 1)).unwrap();
        field.place_vehicle(vehicle("B", 3, 3)).unwrap();

        assert_eq!(field.detect_collision(a), None);
        assert_eq!(field.detect_collision(VehicleId(7)), None);
    }

    #[test]
    fn vehicles_iterates_in_insertion_order() {
        let mut field = Field::new(5, 5);
        field.place_vehicle(vehicle("A", 0, 0)).unwrap();
        field.place_vehicle(vehicle("B", 1, 0)).unwrap();

        let names: Vec<_> = field
            .vehicles()
            .map(|(id, v)| (id, v.name().to_string()))
            .collect();
        assert_eq!(
            names,
            vec![(VehicleId(0), "A".to_string()), (VehicleId(1), "B".to_string())]
        );
    }

    #[test]
    fn has_pending_commands_tracks_the_fleet() {
        let mut field = Field::new(5, 5);
        let mut v = vehicle("A", 0, 0);
        v.set_commands("F").unwrap();
        let id = field.place_vehicle(v).unwrap();
        assert!(field.has_pending_commands());

        field
            .vehicle_mut(id)
            .unwrap()
            .execute_next_command()
            .unwrap();
        assert!(!field.has_pending_commands());
    }

    proptest! {
        #[test]
        fn bounds_predicate_matches_its_definition(
            width in 0u32..512,
            height in 0u32..512,
            x in any::<i32>(),
            y in any::<i32>(),
        ) {
            let field = Field::new(width, height);
            let expected = x >= 0
                && y >= 0
                && i64::from(x) < i64::from(width)
                && i64::from(y) < i64::from(height);
            prop_assert_eq!(field.is_within_bounds(Position::new(x, y)), expected);
        }
    }
}
