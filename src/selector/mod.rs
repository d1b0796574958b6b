//! Shot selection strategies
//!
//! A selector owns the belief state for one game. The outer loop alternates
//! strictly between [`ShotSelector::select_shot`] and
//! [`ShotSelector::report_outcome`]; shots travel as tokens such as `"A-1"`.

use alloc::string::String;
use rand::rngs::SmallRng;

use crate::core::{EnemyGrid, Fleet, TargetingError};

pub mod probabilistic;
pub mod random;

pub use probabilistic::{ProbabilisticSelector, SinkingShip};
pub use random::RandomSelector;

/// Interface shared by the targeting strategies.
pub trait ShotSelector {
    /// Choose the next cell to attack.
    fn select_shot(&mut self) -> Result<String, TargetingError>;

    /// Feed back the result of firing `shot`. `sunk` carries the total
    /// length of a ship this shot finished off.
    fn report_outcome(
        &mut self,
        shot: &str,
        hit: bool,
        sunk: Option<usize>,
    ) -> Result<(), TargetingError>;

    /// Current belief about the enemy board.
    fn grid(&self) -> &EnemyGrid;
}

/// Which strategy drives a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Shuffled sweep of the board.
    #[default]
    Random,
    /// Placement-counting probability map.
    #[cfg_attr(feature = "std", value(name = "mapping"))]
    Probabilistic,
}

/// Strategy chosen at construction time.
#[derive(Debug, Clone)]
pub enum Selector {
    Random(RandomSelector),
    Probabilistic(ProbabilisticSelector),
}

impl Selector {
    pub fn new(
        strategy: Strategy,
        dimension: usize,
        fleet: Fleet,
        mut rng: SmallRng,
    ) -> Result<Self, TargetingError> {
        Ok(match strategy {
            Strategy::Random => Selector::Random(RandomSelector::new(dimension, fleet, &mut rng)?),
            Strategy::Probabilistic => {
                Selector::Probabilistic(ProbabilisticSelector::new(dimension, fleet, rng)?)
            }
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Selector::Random(_) => Strategy::Random,
            Selector::Probabilistic(_) => Strategy::Probabilistic,
        }
    }
}

impl ShotSelector for Selector {
    fn select_shot(&mut self) -> Result<String, TargetingError> {
        match self {
            Selector::Random(s) => s.select_shot(),
            Selector::Probabilistic(s) => s.select_shot(),
        }
    }

    fn report_outcome(
        &mut self,
        shot: &str,
        hit: bool,
        sunk: Option<usize>,
    ) -> Result<(), TargetingError> {
        match self {
            Selector::Random(s) => s.report_outcome(shot, hit, sunk),
            Selector::Probabilistic(s) => s.report_outcome(shot, hit, sunk),
        }
    }

    fn grid(&self) -> &EnemyGrid {
        match self {
            Selector::Random(s) => s.grid(),
            Selector::Probabilistic(s) => s.grid(),
        }
    }
}
