//! Headless autoplay: the hero heads for the down stairs of every level and
//! fights whatever blocks the way. Prints the final score as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use renethack::{GameConfig, GameSession, Score, TileType, logging};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "renethack")]
#[command(about = "Headless renethack autoplay")]
struct Args {
    /// Seed for the hero and every level
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Ticks to play before giving up
    #[arg(long, default_value_t = 5_000)]
    ticks: u64,

    #[arg(long, default_value = "Rogue")]
    name: String,

    /// JSON game configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            GameConfig::from_json(&json)
        }
        None => Ok(GameConfig::default()),
    }
}

/// Gives an idle hero something to do.
fn plan(session: &mut GameSession) -> Result<()> {
    let world = session.world();
    let hero = world.hero()?;
    if hero.has_actions() || !hero.stats.can_act() {
        return Ok(());
    }
    let target = world.current_level().find(TileType::DownStairs);
    let planned = match target {
        Some(target) => session.path_to(target),
        None => session.wait(),
    };
    if let Err(e) = planned {
        if !e.is_recoverable() {
            return Err(e.into());
        }
        session.wait()?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<Score> {
    let config = load_config(args.config.as_deref())?;
    let mut session = GameSession::new(&config, &args.name, args.seed)?;

    for _ in 0..args.ticks {
        plan(&mut session)?;
        let finished = session.advance()?;
        for message in session.world_mut().drain_messages() {
            info!("{message}");
        }
        if let Some(score) = finished {
            return Ok(score);
        }
    }

    warn!(ticks = args.ticks, "tick budget exhausted");
    session
        .exit()?
        .context("the game ended without a score")
}

fn main() -> Result<()> {
    logging::init_tracing_default();
    let args = Args::parse();
    let score = run(&args)?;
    println!("{}", serde_json::to_string(&score)?);
    Ok(())
}
