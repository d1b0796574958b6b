#![cfg(feature = "std")]
//! Turn loop driving one selector through a game.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::{sleep, Duration};

use crate::loader::PlayerBoard;
use crate::protocol::{GameClient, GameStatus};
use crate::selector::{Selector, ShotSelector};

/// Plays a single game: polls the server until it is our turn, fires the
/// selector's choice and feeds the result back.
pub struct Player<C: GameClient> {
    client: C,
    selector: Selector,
    board: PlayerBoard,
    pause: Duration,
    confirmations: Option<Box<dyn AsyncBufRead + Unpin + Send>>,
    game_id: Option<u64>,
    shots_fired: usize,
}

impl<C: GameClient> Player<C> {
    pub fn new(client: C, selector: Selector, board: PlayerBoard, pause: Duration) -> Self {
        Self {
            client,
            selector,
            board,
            pause,
            confirmations: None,
            game_id: None,
            shots_fired: 0,
        }
    }

    /// Wait for a line on stdin before every shot.
    pub fn with_manual_shot(mut self, manual_shot: bool) -> Self {
        self.confirmations = manual_shot
            .then(|| Box::new(BufReader::new(tokio::io::stdin())) as Box<dyn AsyncBufRead + Unpin + Send>);
        self
    }

    /// Wait for a line from `reader` before every shot. The reader is kept
    /// for the whole game, so buffered lines carry over between turns.
    pub fn with_confirmations<R>(mut self, reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        self.confirmations = Some(Box::new(reader));
        self
    }

    /// Open a new game and return its id.
    pub async fn start(&mut self) -> anyhow::Result<u64> {
        let game_id = self.client.start(self.board.clone()).await?;
        log::info!("started game {}", game_id);
        self.game_id = Some(game_id);
        Ok(game_id)
    }

    /// Enter an existing game.
    pub async fn join(&mut self, game_id: u64) -> anyhow::Result<()> {
        self.client.join(game_id, self.board.clone()).await?;
        log::info!("joined game {}", game_id);
        self.game_id = Some(game_id);
        Ok(())
    }

    /// Play until the server reports the game over and return the final
    /// status. Any targeting error aborts the game.
    pub async fn play(&mut self) -> anyhow::Result<GameStatus> {
        let game_id = self
            .game_id
            .ok_or_else(|| anyhow::anyhow!("start or join a game before playing"))?;
        loop {
            let (status, my_turn) = self.client.status(game_id).await?;
            if status != GameStatus::Playing {
                log::info!("I {}! ({} shots fired)", status, self.shots_fired);
                return Ok(status);
            }
            if my_turn {
                self.take_turn(game_id).await?;
            } else {
                sleep(self.pause).await;
            }
        }
    }

    async fn take_turn(&mut self, game_id: u64) -> anyhow::Result<()> {
        let shot = self.selector.select_shot()?;
        if let Some(reader) = self.confirmations.as_mut() {
            wait_for_enter(reader, &shot).await?;
        }
        let report = self.client.fire(game_id, &shot).await?;
        self.shots_fired += 1;
        log::debug!("shot result: {}, hit: {}, sunk: {:?}", shot, report.hit, report.sunk);
        self.selector.report_outcome(&shot, report.hit, report.sunk)?;
        Ok(())
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

async fn wait_for_enter<R>(reader: &mut R, shot: &str) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    println!("Next shot {}, press Enter to fire", shot);
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        anyhow::bail!("confirmation input closed before shot {}", shot);
    }
    Ok(())
}
