//! Compass headings and the turn algebra.

use std::fmt;
use std::str::FromStr;

use crate::error::DirectionError;

/// A cardinal heading on the field.
///
/// Turning is total: every direction has a left and a right neighbour,
/// and four turns the same way return to the start. Facing north means
/// a forward move increases `y`; the full offset table is in
/// [`offset()`](Direction::offset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward increasing `y`.
    North,
    /// Toward decreasing `y`.
    South,
    /// Toward increasing `x`.
    East,
    /// Toward decreasing `x`.
    West,
}

impl Direction {
    /// All headings, in `N`/`S`/`E`/`W` order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The heading after a 90 degree counterclockwise turn.
    ///
    /// Cycles N → W → S → E → N.
    #[must_use]
    pub fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading after a 90 degree clockwise turn.
    ///
    /// Cycles N → E → S → W → N; the inverse of
    /// [`turned_left`](Self::turned_left).
    #[must_use]
    pub fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit translation `(dx, dy)` of one forward move along this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The one-letter symbol for this heading.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Parse a single heading symbol.
    ///
    /// Only the uppercase letters `N`, `S`, `E`, `W` are recognized.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    /// Parse a one-character heading string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or(DirectionError::UnknownSymbol { symbol: c })
            }
            _ => Err(DirectionError::NotSingle {
                input: s.to_string(),
            }),
        }
    }
}
