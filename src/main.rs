#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::{init_logging, loader, Player, Selector, Strategy, Stub, TcpTransport};
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Plays a game of battleship against a remote game server.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Host name of the gameplay server.
    host: String,
    /// Port of the gameplay server.
    port: u16,
    /// Name of the player playing the game.
    player: String,
    /// JSON file containing the player board.
    playerboard: String,
    /// JSON file containing the number and size of the initial fleet.
    fleet: String,
    #[arg(long, default_value_t = 1.0, help = "Seconds to pause between status polls (0.5 is half a second)")]
    pause: f64,
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    strategy: Strategy,
    #[arg(long, value_enum, help = "Log level (falls back to SALVO_LOG, then info)")]
    logging: Option<LogLevel>,
    #[arg(long, help = "Game id to join (default is to start a new game)")]
    join: Option<u64>,
    #[arg(long, help = "Wait for Enter before every shot")]
    manual_shot: bool,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum LogLevel {
    Debug,
    Info,
}

#[cfg(feature = "std")]
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging.map(Into::into));

    if !cli.pause.is_finite() || cli.pause < 0.0 {
        anyhow::bail!("--pause must be a non-negative number of seconds");
    }
    let board = loader::load_board(&cli.playerboard)?;
    let fleet = loader::load_fleet(&cli.fleet)?;

    let rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {} (shot order will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let selector = Selector::new(cli.strategy, board.len(), fleet, rng)?;

    let transport = TcpTransport::connect((cli.host.as_str(), cli.port)).await?;
    let client = Stub::new(transport, cli.player);
    let mut player = Player::new(client, selector, board, Duration::from_secs_f64(cli.pause))
        .with_manual_shot(cli.manual_shot);

    match cli.join {
        Some(game_id) => player.join(game_id).await?,
        None => {
            let game_id = player.start().await?;
            println!("Starting new game, id: {}", game_id);
        }
    }
    let status = player.play().await?;
    println!("Game over: {}", status);
    Ok(())
}
