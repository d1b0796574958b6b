#![allow(dead_code)]

use std::collections::HashSet;

use salvo::{Coordinate, FireReport, GameClient, GameStatus};

/// Opponent board with fixed ship placements.
pub struct HiddenFleet {
    pub dimension: usize,
    ships: Vec<Vec<Coordinate>>,
    hits: HashSet<Coordinate>,
}

impl HiddenFleet {
    /// Ships as `(row, col, length, horizontal)`.
    pub fn new(dimension: usize, ships: &[(usize, usize, usize, bool)]) -> Self {
        let ships = ships
            .iter()
            .map(|&(x, y, len, horizontal)| {
                (0..len)
                    .map(|k| {
                        if horizontal {
                            Coordinate::new(x, y + k)
                        } else {
                            Coordinate::new(x + k, y)
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            dimension,
            ships,
            hits: HashSet::new(),
        }
    }

    /// Classic 10x10 layout with two ships touching.
    pub fn classic() -> Self {
        HiddenFleet::new(
            10,
            &[
                (0, 0, 5, true),
                (1, 0, 4, true),
                (4, 4, 3, false),
                (4, 5, 3, false),
                (9, 8, 2, true),
            ],
        )
    }

    pub fn fire(&mut self, coordinate: Coordinate) -> FireReport {
        let Some(ship) = self.ships.iter().find(|s| s.contains(&coordinate)) else {
            return FireReport { hit: false, sunk: None };
        };
        let newly_hit = self.hits.insert(coordinate);
        let sunk = newly_hit && ship.iter().all(|c| self.hits.contains(c));
        FireReport {
            hit: true,
            sunk: sunk.then_some(ship.len()),
        }
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().flatten().all(|c| self.hits.contains(c))
    }
}

/// In-process game: our turn on every other status poll, won once the
/// hidden fleet is gone.
pub struct LocalGame {
    pub fleet: HiddenFleet,
    pub game_id: u64,
    pub polls: usize,
    pub shots: Vec<String>,
    /// Replace every sunk length with this one.
    pub corrupt_sunk: Option<usize>,
}

impl LocalGame {
    pub fn new(fleet: HiddenFleet) -> Self {
        Self {
            fleet,
            game_id: 7,
            polls: 0,
            shots: Vec::new(),
            corrupt_sunk: None,
        }
    }
}

#[async_trait::async_trait]
impl GameClient for LocalGame {
    async fn start(&mut self, board: Vec<Vec<u8>>) -> anyhow::Result<u64> {
        anyhow::ensure!(board.len() == self.fleet.dimension, "board size mismatch");
        Ok(self.game_id)
    }

    async fn join(&mut self, game_id: u64, _board: Vec<Vec<u8>>) -> anyhow::Result<()> {
        anyhow::ensure!(game_id == self.game_id, "no game {}", game_id);
        Ok(())
    }

    async fn status(&mut self, game_id: u64) -> anyhow::Result<(GameStatus, bool)> {
        anyhow::ensure!(game_id == self.game_id, "no game {}", game_id);
        self.polls += 1;
        if self.fleet.all_sunk() {
            return Ok((GameStatus::Won, false));
        }
        Ok((GameStatus::Playing, self.polls % 2 == 0))
    }

    async fn fire(&mut self, game_id: u64, shot: &str) -> anyhow::Result<FireReport> {
        anyhow::ensure!(game_id == self.game_id, "no game {}", game_id);
        let coordinate = Coordinate::parse_shot(shot, self.fleet.dimension)?;
        self.shots.push(shot.to_string());
        let mut report = self.fleet.fire(coordinate);
        if report.sunk.is_some() {
            if let Some(length) = self.corrupt_sunk {
                report.sunk = Some(length);
            }
        }
        Ok(report)
    }
}

pub fn empty_board(dimension: usize) -> Vec<Vec<u8>> {
    vec![vec![0; dimension]; dimension]
}
