//! Grid coordinates and vehicle poses.

use std::fmt;

use crate::direction::Direction;

/// A cell coordinate on the field.
///
/// Coordinates are signed so that off-field positions, such as the
/// target of a forward move across the southern edge, stay
/// representable. `(0, 0)` is the bottom-left cell of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing northward.
    pub y: i32,
}

impl Position {
    /// Creates a position from column and row coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell along `direction`.
    ///
    /// The translation is unchecked; the result may lie outside any
    /// field.
    #[must_use]
    pub fn translated(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position paired with a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pose {
    /// Where the vehicle stands.
    pub position: Position,
    /// Which way it faces.
    pub direction: Direction,
}

impl Pose {
    /// Creates a pose from a position and a heading.
    #[must_use]
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_follows_compass_offsets() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.translated(Direction::North), Position::new(3, 4));
        assert_eq!(origin.translated(Direction::South), Position::new(3, 2));
        assert_eq!(origin.translated(Direction::East), Position::new(4, 3));
        assert_eq!(origin.translated(Direction::West), Position::new(2, 3));
    }

    #[test]
    fn translated_can_leave_the_first_quadrant() {
        assert_eq!(
            Position::new(0, 0).translated(Direction::South),
            Position::new(0, -1)
        );
        assert_eq!(
            Position::new(0, 0).translated(Direction::West),
            Position::new(-1, 0)
        );
    }

    #[test]
    fn opposite_translations_cancel() {
        let start = Position::new(5, 7);
        for direction in Direction::ALL {
            let opposite = direction.turned_left().turned_left();
            assert_eq!(start.translated(direction).translated(opposite), start);
        }
    }

    #[test]
    fn display_matches_report_format() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Position::new(-1, 0).to_string(), "(-1, 0)");

        let pose = Pose::new(Position::new(4, 4), Direction::South);
        assert_eq!(pose.to_string(), "(4, 4) S");
    }
}
