//! Graphs CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "graphs")]
#[command(about = "Interactive graph editing with undo and shortest paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ./graphs.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read graph commands from a script or stdin
    Run {
        /// Build a directed graph
        #[arg(long)]
        directed: bool,

        /// Script file (defaults to stdin)
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Print info and edge listings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("graphs={}", log_level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run {
            directed,
            script,
            json,
        } => {
            let mut config = Config::load(cli.config.as_deref(), &std::env::current_dir()?)?;
            config.graph.directed |= directed;
            config.output.json |= json;
            tracing::debug!("Graphs v{} ({})", env!("CARGO_PKG_VERSION"), config.kind());
            commands::run(&config, script)
        }
        Commands::Version => {
            println!("Graphs v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
