#![cfg(feature = "std")]

use crate::{protocol::GameClient, protocol::Message, transport::Transport};

/// Server side of the game protocol: decodes requests and forwards them to
/// a [`GameClient`] implementation, replying with its answers. Failures of
/// the game are reported to the peer as [`Message::Error`].
pub struct Skeleton<G: GameClient, T: Transport> {
    game: G,
    transport: T,
}

impl<G: GameClient, T: Transport> Skeleton<G, T> {
    pub fn new(game: G, transport: T) -> Self {
        Self { game, transport }
    }

    /// Serve requests until the peer disconnects.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while let Ok(msg) = self.transport.recv().await {
            let reply = self.dispatch(msg).await;
            self.transport.send(reply).await?;
        }
        Ok(())
    }

    /// Consume the skeleton and hand back the game it served.
    pub fn into_inner(self) -> G {
        self.game
    }

    async fn dispatch(&mut self, msg: Message) -> Message {
        let result = match msg {
            Message::StartReq { user, board } => {
                log::debug!("start from {}", user);
                self.game
                    .start(board)
                    .await
                    .map(|game_id| Message::StartResp { game_id })
            }
            Message::JoinReq { user, game_id, board } => {
                log::debug!("join {} from {}", game_id, user);
                self.game
                    .join(game_id, board)
                    .await
                    .map(|()| Message::JoinResp { game_id })
            }
            Message::StatusReq { game_id, .. } => self
                .game
                .status(game_id)
                .await
                .map(|(status, my_turn)| Message::StatusResp { status, my_turn }),
            Message::FireReq { game_id, shot, .. } => self
                .game
                .fire(game_id, &shot)
                .await
                .map(Message::FireResp),
            other => Err(anyhow::anyhow!("Unexpected request: {:?}", other)),
        };
        result.unwrap_or_else(|e| Message::Error(e.to_string()))
    }
}
