#![cfg(feature = "std")]

use crate::loader::PlayerBoard;
use crate::protocol::{FireReport, GameClient, GameStatus, Message};
use crate::transport::Transport;

/// Client side of the game protocol: each command is one request and one
/// reply over the transport.
pub struct Stub<T: Transport> {
    transport: T,
    user: String,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T, user: impl Into<String>) -> Self {
        Self {
            transport,
            user: user.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    async fn request(&mut self, msg: Message) -> anyhow::Result<Message> {
        log::debug!("request: {:?}", msg);
        self.transport.send(msg).await?;
        let reply = self.transport.recv().await?;
        log::debug!("reply: {:?}", reply);
        match reply {
            Message::Error(reason) => Err(anyhow::anyhow!("Server error: {}", reason)),
            other => Ok(other),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameClient for Stub<T> {
    async fn start(&mut self, board: PlayerBoard) -> anyhow::Result<u64> {
        let user = self.user.clone();
        match self.request(Message::StartReq { user, board }).await? {
            Message::StartResp { game_id } => Ok(game_id),
            other => Err(anyhow::anyhow!("Expected StartResp, got {:?}", other)),
        }
    }

    async fn join(&mut self, game_id: u64, board: PlayerBoard) -> anyhow::Result<()> {
        let user = self.user.clone();
        match self.request(Message::JoinReq { user, game_id, board }).await? {
            Message::JoinResp { game_id: joined } if joined == game_id => Ok(()),
            Message::JoinResp { game_id: joined } => Err(anyhow::anyhow!(
                "Joined game {} but asked for {}",
                joined,
                game_id
            )),
            other => Err(anyhow::anyhow!("Expected JoinResp, got {:?}", other)),
        }
    }

    async fn status(&mut self, game_id: u64) -> anyhow::Result<(GameStatus, bool)> {
        let user = self.user.clone();
        match self.request(Message::StatusReq { user, game_id }).await? {
            Message::StatusResp { status, my_turn } => Ok((status, my_turn)),
            other => Err(anyhow::anyhow!("Expected StatusResp, got {:?}", other)),
        }
    }

    async fn fire(&mut self, game_id: u64, shot: &str) -> anyhow::Result<FireReport> {
        let user = self.user.clone();
        let shot = shot.to_string();
        match self.request(Message::FireReq { user, game_id, shot }).await? {
            Message::FireResp(report) => Ok(report),
            other => Err(anyhow::anyhow!("Expected FireResp, got {:?}", other)),
        }
    }
}
