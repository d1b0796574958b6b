#![cfg(feature = "std")]
//! Requests and replies exchanged with the game server.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loader::PlayerBoard;

/// Progress of a game as seen by this player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(s)
    }
}

/// Server feedback for a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireReport {
    pub hit: bool,
    /// Total length of the ship this shot sank, if any.
    pub sunk: Option<usize>,
}

/// Messages exchanged between a player and the game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Open a new game with our board.
    StartReq { user: String, board: PlayerBoard },
    StartResp { game_id: u64 },
    /// Enter an existing game with our board.
    JoinReq { user: String, game_id: u64, board: PlayerBoard },
    JoinResp { game_id: u64 },
    StatusReq { user: String, game_id: u64 },
    StatusResp { status: GameStatus, my_turn: bool },
    /// Attack the cell named by a shot token such as `"B-7"`.
    FireReq { user: String, game_id: u64, shot: String },
    FireResp(FireReport),
    /// The server rejected the request.
    Error(String),
}

/// Commands a player issues against a game.
#[async_trait::async_trait]
pub trait GameClient: Send {
    /// Open a new game with our board and return its id.
    async fn start(&mut self, board: PlayerBoard) -> anyhow::Result<u64>;
    /// Enter the game `game_id` with our board.
    async fn join(&mut self, game_id: u64, board: PlayerBoard) -> anyhow::Result<()>;
    /// Current status and whether it is our turn to fire.
    async fn status(&mut self, game_id: u64) -> anyhow::Result<(GameStatus, bool)>;
    /// Fire `shot` at the opponent.
    async fn fire(&mut self, game_id: u64, shot: &str) -> anyhow::Result<FireReport>;
}
