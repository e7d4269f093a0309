use std::io;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{
    Coord, DEFAULT_GRID_SIZE, DEFAULT_MINE_PROBABILITY_PERCENT, Game, GameConfig, GridSize,
};

mod command;
mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE.width)]
    width: Coord,

    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE.height)]
    height: Coord,

    /// Chance for each square to hold a mine, in percent
    #[arg(short, long, default_value_t = DEFAULT_MINE_PROBABILITY_PERCENT)]
    mine_probability: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(GridSize::new(args.width, args.height), args.mine_probability)
        .context("Invalid game settings")?;
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(config, seed)?,
        None => Game::new(config)?,
    };
    log::debug!("{:?}, seed: {}", game.config(), game.seed());

    play::run(&mut game, io::stdin().lock(), io::stdout().lock())
}
