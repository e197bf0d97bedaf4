mod commands;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use showcase::ShowcaseConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version, about = "Showcase CLI - drive the interactive page headlessly", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "showcase.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON event script and print the final display state
    Replay {
        /// Script file: a JSON array of `{"event": ...}` and `{"wait_ms": n}` steps
        script: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },

    /// Validate form input and show the submit decision
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        /// Print the raw validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable summary
    Summary,
    /// Full display state as JSON
    Json,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<ShowcaseConfig> {
    ShowcaseConfig::load(path)
        .with_context(|| format!("Failed to load configuration from {:?}", path))
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    // Execute command; only the commands that drive the page read the config
    match cli.command {
        Commands::Replay { script, format } => {
            let config = load_config(&cli.config)?;
            commands::replay::execute(&config, &script, format)?;
        }
        Commands::Validate {
            name,
            email,
            password,
            json,
        } => {
            commands::validate::execute(&name, &email, &password, json)?;
        }
        Commands::Config => {
            commands::config::execute(&load_config(&cli.config)?)?;
        }
    }

    Ok(())
}
