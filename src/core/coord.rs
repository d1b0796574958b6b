//! Board coordinates, unit-step directions and the shot token encoding.
//!
//! A shot token is the row letter (`'A' + x`), a `-` separator and the
//! 1-based column number (`y + 1`), so `(0, 0)` travels as `"A-1"`.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::core::config::MAX_DIMENSION;
use crate::core::error::TargetingError;

const SEPARATOR: char = '-';

/// A `(row, column)` position on the enemy board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies on an `dimension`×`dimension` board.
    pub fn in_bounds(&self, dimension: usize) -> bool {
        self.x < dimension && self.y < dimension
    }

    /// Neighbouring coordinate one step in `direction`, or `None` when it
    /// would leave the board.
    pub fn step(&self, direction: Direction, dimension: usize) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Coordinate::new(x, y);
        next.in_bounds(dimension).then_some(next)
    }

    /// Encode as a shot token such as `"C-7"`. Rows past `Z` have no
    /// letter and are rejected.
    pub fn to_shot(&self) -> Result<String, TargetingError> {
        if self.x >= MAX_DIMENSION {
            return Err(TargetingError::CoordinateOutOfBounds { x: self.x, y: self.y });
        }
        Ok(self.to_string())
    }

    /// Decode a shot token, rejecting anything that does not land on a
    /// `dimension`×`dimension` board.
    pub fn parse_shot(token: &str, dimension: usize) -> Result<Coordinate, TargetingError> {
        let malformed = || TargetingError::MalformedShotToken(token.to_string());
        let (row, column) = token.split_once(SEPARATOR).ok_or_else(malformed)?;

        let mut letters = row.chars();
        let x = match (letters.next(), letters.next()) {
            (Some(letter @ 'A'..='Z'), None) => letter as usize - 'A' as usize,
            _ => return Err(malformed()),
        };
        if !column.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let y = column
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(malformed)?;

        let coordinate = Coordinate::new(x, y);
        if !coordinate.in_bounds(dimension) {
            return Err(malformed());
        }
        Ok(coordinate)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x < MAX_DIMENSION {
            let row = char::from(b'A' + self.x as u8);
            write!(f, "{}{}{}", row, SEPARATOR, self.y + 1)
        } else {
            write!(f, "#{}{}{}", self.x, SEPARATOR, self.y + 1)
        }
    }
}

/// Unit steps across the board. North and south move between rows, east
/// and west between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(row, column)` delta of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}
