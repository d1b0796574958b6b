use alloc::{string::String, vec::Vec};
use rand::{seq::SliceRandom, Rng};

use crate::core::{Coordinate, EnemyGrid, Fleet, ShotOutcome, TargetingError};

use super::ShotSelector;

/// Fires at every cell exactly once, in an order fixed by a uniform shuffle
/// at construction.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    grid: EnemyGrid,
    remaining: Vec<Coordinate>,
}

impl RandomSelector {
    pub fn new<R: Rng + ?Sized>(
        dimension: usize,
        fleet: Fleet,
        rng: &mut R,
    ) -> Result<Self, TargetingError> {
        let grid = EnemyGrid::new(dimension, fleet)?;
        let mut remaining: Vec<Coordinate> = grid.iter_cells().map(|(c, _)| c).collect();
        remaining.shuffle(rng);
        Ok(Self { grid, remaining })
    }

    /// Cells not yet fired at.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl ShotSelector for RandomSelector {
    fn select_shot(&mut self) -> Result<String, TargetingError> {
        let coordinate = self.remaining.pop().ok_or(TargetingError::SelectionExhausted)?;
        let shot = coordinate.to_shot()?;
        log::debug!("select shot: {}", shot);
        Ok(shot)
    }

    fn report_outcome(
        &mut self,
        shot: &str,
        hit: bool,
        sunk: Option<usize>,
    ) -> Result<(), TargetingError> {
        let coordinate = Coordinate::parse_shot(shot, self.grid.dimension())?;
        self.grid
            .apply_outcome(coordinate, ShotOutcome::from_report(hit, sunk))
    }

    fn grid(&self) -> &EnemyGrid {
        &self.grid
    }
}
