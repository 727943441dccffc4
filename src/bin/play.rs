use anyhow::Context;
use clap::Parser;
use playtext::utils::logger;
use playtext::{lineup, play_all};
use std::io;

#[derive(Parser)]
#[command(name = "play")]
#[command(about = "Play a football player and a music player, in that order")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let players = lineup();
    tracing::debug!("Lineup has {} players", players.len());

    let stdout = io::stdout();
    play_all(&players, &mut stdout.lock()).context("failed to write to stdout")?;

    Ok(())
}
