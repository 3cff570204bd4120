use anyhow::{Context, Result};
use clap::Parser;
use csar_othello::{Board, Player};
use csar_player::agents::{Agent, EngineAgent, HumanAgent};
use csar_player::cli::Options;
use csar_search::{SearchConfig, Searcher};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn agent_for(player: Player, human: Option<Player>, config: SearchConfig) -> Result<Box<dyn Agent>> {
    if human == Some(player) {
        return Ok(Box::new(HumanAgent::new(io::stdin().lock(), io::stdout())));
    }

    let searcher = Searcher::new(config).context("invalid search configuration")?;
    Ok(Box::new(EngineAgent::new(searcher, io::stdout())))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = Options::parse();
    let config = options
        .search_config()
        .context("invalid search configuration")?;
    let human = options.human();

    info!(
        depth = config.depth,
        evaluator = %config.evaluator,
        human = ?human,
        "csar starting"
    );

    let mut dark = agent_for(Player::Dark, human, config)?;
    let mut light = agent_for(Player::Light, human, config)?;
    let mut stdout = io::stdout();

    csar_player::run_game(Board::new(), dark.as_mut(), light.as_mut(), &mut stdout)
        .context("game aborted")?;

    Ok(())
}
