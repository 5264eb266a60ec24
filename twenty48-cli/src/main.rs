//! twenty48 CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the HTTP game server
//! - autoplay: Play seeded random games and report scores

mod autoplay;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "twenty48")]
#[command(about = "2048 game engine and server")]
struct Cli {
    /// Random seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP game server
    Serve(server::ServerArgs),
    /// Play random games and report scores
    Autoplay(autoplay::AutoplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args, cli.seed),
        Commands::Autoplay(args) => autoplay::run(args, cli.seed),
    }
}
