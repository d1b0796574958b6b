//! Belief state about the enemy board.
//!
//! `EnemyGrid` owns the per-cell knowledge gathered from our own shots and
//! the fleet of enemy ships still afloat. It changes exactly once per
//! reported outcome, and only at the attacked cell.

use alloc::{vec, vec::Vec};
use core::fmt;

use crate::core::config::MAX_DIMENSION;
use crate::core::coord::Coordinate;
use crate::core::error::TargetingError;
use crate::core::fleet::Fleet;

/// Knowledge about a single enemy cell.
///
/// Discriminants keep every obstacle numerically below `Open`, so
/// `state < CellState::Hit` reads as "no ship can be placed here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum CellState {
    /// Nothing known yet; may be attacked.
    Open = 0,
    /// A ship was hit here and is not known to be sunk.
    Hit = -1,
    /// The shot that sank a ship.
    Bullseye = -2,
    /// Part of a ship whose footprint has been resolved.
    Sunk = -3,
    /// Water.
    Miss = -4,
}

impl CellState {
    /// Cells that no unresolved ship can occupy.
    pub fn is_obstacle(self) -> bool {
        self < CellState::Hit
    }

    pub fn is_open(self) -> bool {
        self == CellState::Open
    }

    fn symbol(self) -> char {
        match self {
            CellState::Open => '.',
            CellState::Hit => 'x',
            CellState::Bullseye => '*',
            CellState::Sunk => '#',
            CellState::Miss => 'o',
        }
    }
}

/// Feedback for a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// The shot completed a ship of the given total length.
    Sunk(usize),
}

impl ShotOutcome {
    /// Combine the `(hit, sunk)` pair reported by the game server. A sunk
    /// length takes precedence over the hit flag.
    pub fn from_report(hit: bool, sunk: Option<usize>) -> Self {
        match (hit, sunk) {
            (_, Some(length)) => ShotOutcome::Sunk(length),
            (true, None) => ShotOutcome::Hit,
            (false, None) => ShotOutcome::Miss,
        }
    }
}

/// Square grid of `CellState` plus the remaining enemy fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyGrid {
    dimension: usize,
    cells: Vec<CellState>,
    fleet: Fleet,
}

impl EnemyGrid {
    /// All-`Open` grid for a fresh game.
    pub fn new(dimension: usize, fleet: Fleet) -> Result<Self, TargetingError> {
        if dimension == 0 || dimension > MAX_DIMENSION {
            return Err(TargetingError::InvalidDimension(dimension));
        }
        Ok(Self {
            dimension,
            cells: vec![CellState::Open; dimension * dimension],
            fleet,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// State of the cell at `coordinate`.
    ///
    /// # Panics
    /// If `coordinate` is off the board.
    pub fn cell(&self, coordinate: Coordinate) -> CellState {
        self.cells[self.index(coordinate)]
    }

    /// State of the cell at `coordinate`, or `None` when off the board.
    pub fn get(&self, coordinate: Coordinate) -> Option<CellState> {
        coordinate
            .in_bounds(self.dimension)
            .then(|| self.cells[self.index(coordinate)])
    }

    /// Every coordinate in row-major order together with its state.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &state)| {
            (Coordinate::new(i / self.dimension, i % self.dimension), state)
        })
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Record the outcome of an attack on `coordinate`.
    ///
    /// A sunk report retires one ship of that length from the fleet and
    /// marks the cell `Bullseye`; otherwise the cell becomes `Hit` or `Miss`.
    /// Nothing changes when an error is returned.
    pub fn apply_outcome(
        &mut self,
        coordinate: Coordinate,
        outcome: ShotOutcome,
    ) -> Result<(), TargetingError> {
        if !coordinate.in_bounds(self.dimension) {
            return Err(TargetingError::CoordinateOutOfBounds {
                x: coordinate.x,
                y: coordinate.y,
            });
        }
        let state = match outcome {
            ShotOutcome::Sunk(length) => {
                self.fleet.decrement(length)?;
                CellState::Bullseye
            }
            ShotOutcome::Hit => CellState::Hit,
            ShotOutcome::Miss => CellState::Miss,
        };
        self.set(coordinate, state);
        Ok(())
    }

    /// Overwrite a cell. Used when a sunk ship's footprint is resolved.
    pub(crate) fn set(&mut self, coordinate: Coordinate, state: CellState) {
        let idx = self.index(coordinate);
        self.cells[idx] = state;
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        assert!(
            coordinate.in_bounds(self.dimension),
            "coordinate {:?} outside {}x{} board",
            coordinate,
            self.dimension,
            self.dimension
        );
        coordinate.x * self.dimension + coordinate.y
    }
}

impl fmt::Display for EnemyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            for (i, state) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", state.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
