//! Word Patrol - CLI
//!
//! Daily word challenge with a TUI game board plus stats and share
//! subcommands.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_patrol::{
    events::TracingSink,
    interactive::{App, run_tui},
    output::{print_share, print_stats},
    session::Session,
    storage::JsonFileStore,
};

#[derive(Parser)]
#[command(
    name = "word_patrol",
    about = "Daily word challenge - a new 5-letter word every day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the save slot
    #[arg(short = 'f', long, global = true, default_value = "word_patrol_save.json")]
    save_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's challenge (default)
    Play,

    /// Show your streak and lifetime record
    Stats,

    /// Print today's shareable result grid
    Share,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store = JsonFileStore::new(&cli.save_file);
    let today = Local::now().date_naive();
    let session = Session::start(store, TracingSink, today);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session))?,
        Commands::Stats => print_stats(session.state()),
        Commands::Share => print_share(session.state()),
    }

    Ok(())
}
