//! Probability-weighted shot selection.
//!
//! Every turn the remaining fleet is laid over the board in every legal
//! position. A cell's weight is the number of ways a ship can cover it,
//! boosted heavily for placements that run through unresolved hits, so the
//! selector finishes off damaged ships before hunting for new ones.
//!
//! A sunk report only says how long the ship was, not where it lay. Each
//! report is parked as a [`SinkingShip`] until the hits around its bullseye
//! admit exactly one footprint, at which point those cells are retired. One
//! retirement can disambiguate another pending ship, so resolution runs to a
//! fixpoint.

use alloc::{string::String, vec, vec::Vec};
use core::{fmt, iter};
use rand::{rngs::SmallRng, seq::IndexedRandom};

use crate::core::{
    CellState, Coordinate, Direction, EnemyGrid, Fleet, ShotOutcome, TargetingError, HIT_BONUS,
};

use super::ShotSelector;

/// Placement search only extends east and south: every horizontal run is
/// an eastward extension of its leftmost cell and every vertical run a
/// southward extension of its topmost cell. Adding west and north would
/// count each placement twice.
const PLACEMENT_DIRECTIONS: [Direction; 2] = [Direction::East, Direction::South];

/// A ship reported sunk whose footprint is not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkingShip {
    /// The shot that sank it.
    pub bullseye: Coordinate,
    pub length: usize,
}

impl fmt::Display for SinkingShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bullseye, self.length)
    }
}

#[derive(Debug, Clone)]
pub struct ProbabilisticSelector {
    grid: EnemyGrid,
    pending: Vec<SinkingShip>,
    // Per-turn scratch, zero outside of `select_shot`.
    weights: Vec<u32>,
    rng: SmallRng,
}

impl ProbabilisticSelector {
    pub fn new(dimension: usize, fleet: Fleet, rng: SmallRng) -> Result<Self, TargetingError> {
        Ok(Self::from_grid(EnemyGrid::new(dimension, fleet)?, rng))
    }

    /// Resume from an existing belief state with nothing pending.
    pub fn from_grid(grid: EnemyGrid, rng: SmallRng) -> Self {
        let cells = grid.dimension() * grid.dimension();
        Self {
            grid,
            pending: Vec::new(),
            weights: vec![0; cells],
            rng,
        }
    }

    /// Sunk ships whose footprint is still ambiguous.
    pub fn pending(&self) -> &[SinkingShip] {
        &self.pending
    }

    /// Current weight of `coordinate`. Non-zero only between [`score`] and
    /// the end of the turn.
    ///
    /// [`score`]: ProbabilisticSelector::score
    pub fn weight(&self, coordinate: Coordinate) -> u32 {
        self.weights[coordinate.x * self.grid.dimension() + coordinate.y]
    }

    /// Fill the weight overlay from every feasible placement of the
    /// remaining fleet.
    pub fn score(&mut self) {
        self.weights.fill(0);
        let n = self.grid.dimension();
        for (length, count) in self.grid.fleet().iter() {
            for origin in (0..n * n).map(|i| Coordinate::new(i / n, i % n)) {
                for direction in PLACEMENT_DIRECTIONS {
                    let Some(hit_bonus) = placement_bonus(&self.grid, origin, direction, length)
                    else {
                        continue;
                    };
                    let weight = count as u32 + hit_bonus;
                    for cell in walk(origin, direction, n).take(length) {
                        if self.grid.cell(cell).is_open() {
                            self.weights[cell.x * n + cell.y] += weight;
                        }
                    }
                }
            }
        }
    }

    /// Retire every pending ship whose footprint has become unique, until
    /// a full pass retires nothing. Returns how many ships were retired.
    pub fn resolve_pending(&mut self) -> usize {
        let mut retired = 0;
        loop {
            let mut progressed = false;
            let mut i = self.pending.len();
            while i > 0 {
                i -= 1;
                let Some(footprint) = unique_footprint(&self.grid, &self.pending[i]) else {
                    continue;
                };
                for cell in footprint {
                    self.grid.set(cell, CellState::Sunk);
                }
                let ship = self.pending.remove(i);
                log::debug!("resolved sunk ship {}", ship);
                retired += 1;
                progressed = true;
            }
            if !progressed {
                return retired;
            }
        }
    }

    fn best_coordinate(&mut self) -> Option<Coordinate> {
        let n = self.grid.dimension();
        let best = self.weights.iter().copied().max().filter(|&w| w > 0)?;
        let ties: Vec<Coordinate> = self
            .weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w == best)
            .map(|(i, _)| Coordinate::new(i / n, i % n))
            .collect();
        ties.choose(&mut self.rng).copied()
    }

    fn log_state(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        log::debug!("enemy board\n{}", self.grid);
        log::debug!("ships afloat: {}", self.grid.fleet());
        let pending: Vec<String> = self.pending.iter().map(|s| alloc::format!("{}", s)).collect();
        log::debug!("ships to sink: {}", pending.join(" "));
    }
}

impl ShotSelector for ProbabilisticSelector {
    fn select_shot(&mut self) -> Result<String, TargetingError> {
        self.score();
        let best = self.best_coordinate();
        self.weights.fill(0);
        let shot = best.ok_or(TargetingError::SelectionExhausted)?.to_shot()?;
        log::debug!("select shot: {}", shot);
        Ok(shot)
    }

    fn report_outcome(
        &mut self,
        shot: &str,
        hit: bool,
        sunk: Option<usize>,
    ) -> Result<(), TargetingError> {
        let bullseye = Coordinate::parse_shot(shot, self.grid.dimension())?;
        let outcome = ShotOutcome::from_report(hit, sunk);
        self.grid.apply_outcome(bullseye, outcome)?;
        if let ShotOutcome::Sunk(length) = outcome {
            self.pending.push(SinkingShip { bullseye, length });
        }
        self.resolve_pending();
        self.log_state();
        Ok(())
    }

    fn grid(&self) -> &EnemyGrid {
        &self.grid
    }
}

/// Cells from `origin` stepping in `direction`, ending at the board edge.
fn walk(origin: Coordinate, direction: Direction, n: usize) -> impl Iterator<Item = Coordinate> {
    iter::successors(Some(origin), move |c| c.step(direction, n))
}

/// Hit bonus of a ship of `length` laid from `origin`, or `None` if it runs
/// off the board or across an obstacle.
fn placement_bonus(
    grid: &EnemyGrid,
    origin: Coordinate,
    direction: Direction,
    length: usize,
) -> Option<u32> {
    let mut laid = 0;
    let mut bonus = 0;
    for cell in walk(origin, direction, grid.dimension()).take(length) {
        match grid.cell(cell) {
            state if state.is_obstacle() => return None,
            CellState::Hit => bonus += HIT_BONUS,
            _ => {}
        }
        laid += 1;
    }
    (laid == length).then_some(bonus)
}

/// Cells of `ship` if exactly one direction from the bullseye is a run of
/// `length - 1` hits.
fn unique_footprint(grid: &EnemyGrid, ship: &SinkingShip) -> Option<Vec<Coordinate>> {
    let mut found = None;
    for direction in Direction::ALL {
        if let Some(cells) = sinking_run(grid, ship, direction) {
            if found.is_some() {
                return None;
            }
            found = Some(cells);
        }
    }
    found
}

fn sinking_run(grid: &EnemyGrid, ship: &SinkingShip, direction: Direction) -> Option<Vec<Coordinate>> {
    // The bullseye is skipped by the walk, it would otherwise read as an obstacle.
    let mut cells = Vec::with_capacity(ship.length);
    let mut cell = ship.bullseye;
    for _ in 1..ship.length {
        cell = cell.step(direction, grid.dimension())?;
        if grid.cell(cell) != CellState::Hit {
            return None;
        }
        cells.push(cell);
    }
    cells.push(ship.bullseye);
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn selector(dimension: usize, fleet: &[(usize, usize)]) -> ProbabilisticSelector {
        ProbabilisticSelector::new(
            dimension,
            Fleet::from_counts(fleet.iter().copied()),
            SmallRng::seed_from_u64(99),
        )
        .unwrap()
    }

    fn weights(s: &ProbabilisticSelector) -> Vec<Vec<u32>> {
        let n = s.grid.dimension();
        (0..n)
            .map(|x| (0..n).map(|y| s.weight(Coordinate::new(x, y))).collect())
            .collect()
    }

    const CENTER: Coordinate = Coordinate::new(1, 1);

    #[test]
    fn open_board_weights_are_symmetric() {
        let mut s = selector(3, &[(2, 1)]);
        s.score();
        assert_eq!(weights(&s), [[2, 3, 2], [3, 4, 3], [2, 3, 2]]);
    }

    #[test]
    fn obstacles_block_placements() {
        for obstacle in [CellState::Bullseye, CellState::Miss, CellState::Sunk] {
            let mut s = selector(3, &[(2, 1)]);
            s.grid.set(CENTER, obstacle);
            s.score();
            assert_eq!(
                weights(&s),
                [[2, 2, 2], [2, 0, 2], [2, 2, 2]],
                "obstacle {:?}",
                obstacle
            );
        }
    }

    #[test]
    fn hits_pull_weight_towards_neighbours() {
        let mut s = selector(3, &[(2, 1)]);
        s.grid.set(CENTER, CellState::Hit);
        s.score();
        assert_eq!(weights(&s), [[2, 13, 2], [13, 0, 13], [2, 13, 2]]);
    }

    #[test]
    fn ship_count_scales_base_weight() {
        let mut s = selector(3, &[(2, 2)]);
        s.score();
        assert_eq!(weights(&s), [[4, 6, 4], [6, 8, 6], [4, 6, 4]]);
    }

    #[test]
    fn select_shot_picks_the_maximum_and_resets() {
        let mut s = selector(3, &[(2, 1)]);
        assert_eq!(s.select_shot().unwrap(), "B-2");
        assert!(s.weights.iter().all(|&w| w == 0));

        s.grid.set(CENTER, CellState::Hit);
        let shot = s.select_shot().unwrap();
        assert!(["A-2", "B-1", "B-3", "C-2"].contains(&shot.as_str()), "{}", shot);
        assert!(s.weights.iter().all(|&w| w == 0));
    }

    #[test]
    fn ties_are_broken_across_all_candidates() {
        let mut s = selector(3, &[(2, 1)]);
        s.grid.set(CENTER, CellState::Hit);
        let mut picked = Vec::new();
        for _ in 0..200 {
            let shot = s.select_shot().unwrap();
            if !picked.contains(&shot) {
                picked.push(shot);
            }
        }
        picked.sort();
        assert_eq!(picked, ["A-2", "B-1", "B-3", "C-2"]);
    }

    #[test]
    fn no_feasible_placement_is_exhaustion() {
        let mut s = selector(2, &[(3, 1)]);
        assert_eq!(s.select_shot(), Err(TargetingError::SelectionExhausted));
        assert!(s.weights.iter().all(|&w| w == 0));
    }

    #[test]
    fn unique_footprint_is_retired() {
        let mut s = selector(5, &[(2, 1), (3, 1)]);
        s.report_outcome("A-2", true, None).unwrap();
        s.report_outcome("A-1", true, Some(2)).unwrap();
        assert!(s.pending().is_empty());
        assert_eq!(s.grid.cell(Coordinate::new(0, 0)), CellState::Sunk);
        assert_eq!(s.grid.cell(Coordinate::new(0, 1)), CellState::Sunk);
    }

    #[test]
    fn ambiguous_footprint_stays_pending() {
        let mut s = selector(5, &[(2, 1), (3, 1)]);
        s.report_outcome("A-2", true, None).unwrap();
        s.report_outcome("B-1", true, None).unwrap();
        s.report_outcome("A-1", true, Some(2)).unwrap();
        assert_eq!(
            s.pending(),
            [SinkingShip { bullseye: Coordinate::new(0, 0), length: 2 }]
        );
        assert_eq!(s.grid.count(CellState::Sunk), 0);
        assert_eq!(s.grid.cell(Coordinate::new(0, 0)), CellState::Bullseye);
    }

    #[test]
    fn single_cell_ship_stays_pending() {
        // An empty run succeeds in all four directions, so it is never unique.
        let mut s = selector(3, &[(1, 1), (2, 1)]);
        s.report_outcome("B-2", true, Some(1)).unwrap();
        assert_eq!(s.pending(), [SinkingShip { bullseye: CENTER, length: 1 }]);
        assert_eq!(s.grid.cell(CENTER), CellState::Bullseye);
        assert_eq!(s.resolve_pending(), 0);
    }

    #[test]
    fn pending_ships_topple_like_dominoes() {
        // Row A: hit, sunk, hit, sunk, hit, sunk. Each bullseye is ambiguous
        // until the one to its right pins down the hit they share.
        let mut s = selector(6, &[(2, 3)]);
        s.report_outcome("A-1", true, None).unwrap();
        s.report_outcome("A-3", true, None).unwrap();
        s.report_outcome("A-2", true, Some(2)).unwrap();
        s.report_outcome("A-5", true, None).unwrap();
        s.report_outcome("A-4", true, Some(2)).unwrap();
        assert_eq!(s.pending().len(), 2);
        assert_eq!(s.grid.count(CellState::Sunk), 0);

        s.report_outcome("A-6", true, Some(2)).unwrap();
        assert!(s.pending().is_empty());
        for y in 0..6 {
            assert_eq!(s.grid.cell(Coordinate::new(0, y)), CellState::Sunk);
        }
        assert!(s.grid.fleet().is_empty());
    }

    #[test]
    fn resolve_pending_reports_retired_count() {
        let mut s = selector(4, &[(2, 2)]);
        s.grid.set(Coordinate::new(0, 1), CellState::Hit);
        s.grid.set(Coordinate::new(3, 2), CellState::Hit);
        s.grid.set(Coordinate::new(0, 0), CellState::Bullseye);
        s.grid.set(Coordinate::new(3, 3), CellState::Bullseye);
        s.pending.push(SinkingShip { bullseye: Coordinate::new(0, 0), length: 2 });
        s.pending.push(SinkingShip { bullseye: Coordinate::new(3, 3), length: 2 });
        assert_eq!(s.resolve_pending(), 2);
        assert_eq!(s.resolve_pending(), 0);
        assert_eq!(s.grid.count(CellState::Sunk), 4);
    }
}
