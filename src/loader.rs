#![cfg(feature = "std")]
//! Board and fleet definitions read from JSON files.
//!
//! ```json
//! {"board": [[0, 2, 2], [0, 0, 0], [3, 3, 3]]}
//! {"fleet": {"2": 1, "3": 1}}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::{Fleet, MAX_DIMENSION};

/// Our own ship placements, forwarded verbatim to the server. The engine
/// only reads its dimension.
pub type PlayerBoard = Vec<Vec<u8>>;

#[derive(Deserialize)]
struct BoardFile {
    board: PlayerBoard,
}

#[derive(Deserialize)]
struct FleetFile {
    fleet: BTreeMap<usize, usize>,
}

/// Parse a board document and check that it is square.
pub fn parse_board(json: &str) -> anyhow::Result<PlayerBoard> {
    let file: BoardFile = serde_json::from_str(json).context("invalid board definition")?;
    let n = file.board.len();
    if n == 0 || n > MAX_DIMENSION {
        anyhow::bail!("board dimension must be between 1 and {}, got {}", MAX_DIMENSION, n);
    }
    if let Some(row) = file.board.iter().position(|row| row.len() != n) {
        anyhow::bail!("board is not square: row {} has {} cells, expected {}", row, file.board[row].len(), n);
    }
    Ok(file.board)
}

/// Parse a fleet document mapping ship length to count.
pub fn parse_fleet(json: &str) -> anyhow::Result<Fleet> {
    let file: FleetFile = serde_json::from_str(json).context("invalid fleet definition")?;
    let fleet = Fleet::from_counts(file.fleet);
    if fleet.is_empty() {
        anyhow::bail!("fleet has no ships");
    }
    Ok(fleet)
}

pub fn load_board(path: impl AsRef<Path>) -> anyhow::Result<PlayerBoard> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_board(&json).with_context(|| format!("loading {}", path.display()))
}

pub fn load_fleet(path: impl AsRef<Path>) -> anyhow::Result<Fleet> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_fleet(&json).with_context(|| format!("loading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_square_board() {
        let board = parse_board(r#"{"board": [[0, 2], [0, 2]]}"#).unwrap();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn rejects_ragged_board() {
        let err = parse_board(r#"{"board": [[0, 2], [0]]}"#).unwrap_err();
        assert!(err.to_string().contains("not square"), "{}", err);
        assert!(parse_board(r#"{"board": []}"#).is_err());
    }

    #[test]
    fn parses_fleet_with_string_keys() {
        let fleet = parse_fleet(r#"{"fleet": {"5": 1, "3": 2, "2": 0}}"#).unwrap();
        assert_eq!(fleet.count(5), 1);
        assert_eq!(fleet.count(3), 2);
        assert_eq!(fleet.count(2), 0);
        assert_eq!(fleet.ship_count(), 3);
    }

    #[test]
    fn rejects_empty_fleet() {
        assert!(parse_fleet(r#"{"fleet": {}}"#).is_err());
        assert!(parse_fleet(r#"{"ships": {"2": 1}}"#).is_err());
    }
}
