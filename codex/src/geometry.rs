use serde::{Deserialize, Serialize};

use crate::InvalidSlot;

/// A position on a player's board.
///
/// Only positions where both coordinates are even, or both are odd, can ever
/// hold a card. This turns the infinite grid into a checkerboard on which
/// every card touches its neighbors only at the corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// The horizontal coordinate, growing to the east.
    pub h: i32,
    /// The vertical coordinate, growing to the north.
    pub v: i32,
}

/// One of the eight relative positions around a slot.
///
/// The four diagonals double as the corners of a card face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Is `(h, v)` a position on which a card could be placed?
pub fn validate(h: i32, v: i32) -> bool {
    h.rem_euclid(2) == v.rem_euclid(2)
}

/// The slot next to `slot` in the given direction.
pub fn neighbor(slot: Slot, direction: Direction) -> Slot {
    let (dh, dv) = direction.delta();
    Slot {
        h: slot.h + dh,
        v: slot.v + dv,
    }
}

impl Slot {
    /// The slot reserved for the starter card.
    pub const ROOT: Slot = Slot { h: 0, v: 0 };

    pub fn new(h: i32, v: i32) -> Result<Self, InvalidSlot> {
        if validate(h, v) {
            Ok(Self { h, v })
        } else {
            Err(InvalidSlot { h, v })
        }
    }

    pub fn neighbor(self, direction: Direction) -> Slot {
        neighbor(self, direction)
    }

    /// The four slots that share a corner with this one.
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = (Direction, Slot)> {
        Direction::DIAGONALS
            .into_iter()
            .map(move |direction| (direction, self.neighbor(direction)))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.h, self.v)
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The corner directions, in the order in which a card face stores its corners.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// The coordinate offset of one step in this direction.
    ///
    /// Straight steps move two cells so that a step never changes the parity
    /// of a slot.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 2),
            Direction::South => (0, -2),
            Direction::East => (2, 0),
            Direction::West => (-2, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::NorthWest | Direction::SouthEast | Direction::SouthWest
        )
    }

    /// The index of this corner in a card face's corner array, if it is a corner.
    pub const fn corner_index(self) -> Option<usize> {
        match self {
            Direction::NorthWest => Some(0),
            Direction::NorthEast => Some(1),
            Direction::SouthWest => Some(2),
            Direction::SouthEast => Some(3),
            _ => None,
        }
    }
}
