mod command;
mod config;
mod input;
mod render;
mod session;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_engine::config::Validate;
use tictactoe_engine::{Difficulty, GameMode, SessionRng, log, logger};

use config::{Config, get_config_manager};
use input::spawn_stdin_reader;
use session::TerminalSession;

#[derive(Parser)]
#[command(name = "tictactoe_terminal", about = "Play 3x3 tic-tac-toe in the terminal")]
struct Args {
    /// YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// pvai or pvp
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: Config) -> Config {
        Config {
            mode: self.mode.unwrap_or(config.mode),
            difficulty: self.difficulty.unwrap_or(config.difficulty),
            ai_delay_ms: self.ai_delay_ms.unwrap_or(config.ai_delay_ms),
            seed: self.seed.or(config.seed),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Terminal".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = args.apply_to(config_manager.get_config()?);
    config.validate()?;

    let rng = SessionRng::from_optional_seed(config.seed);
    log!(
        "Loaded config: mode {}, difficulty {}, ai delay {} ms, seed {}",
        config.mode,
        config.difficulty,
        config.ai_delay_ms,
        rng.seed()
    );

    let mut session = TerminalSession::new(
        config.mode,
        config.difficulty,
        Duration::from_millis(config.ai_delay_ms),
        rng,
    );
    session.run(spawn_stdin_reader()).await?;

    Ok(())
}
