//! PetCam viewer CLI
//!
//! Command-line front end for browsing a PetCam capture service.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use petcam_viewer::config::{ConfigOverrides, API_BASE_ENV};
use petcam_viewer::{load_config, Action, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "petcam-viewer")]
#[command(about = "Browse snapshots from a PetCam capture service")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config file and PETCAM_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Number of captures requested from /list
    #[arg(long)]
    per_page: Option<u32>,

    /// Only list captures from this day (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Show times in UTC instead of the local time zone
    #[arg(long)]
    utc: bool,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Option<CommandArg>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum CommandArg {
    /// Interactive browser (default)
    Browse,
    /// Load once and print the current view
    Show,
    /// Take a picture now and print the refreshed view
    Capture,
    /// Print metadata of a single capture
    Image {
        /// Capture id
        id: u64,
    },
    /// Print the backend's capture settings
    Settings,
}

impl From<CommandArg> for Action {
    fn from(command: CommandArg) -> Self {
        match command {
            CommandArg::Browse => Action::Browse,
            CommandArg::Show => Action::Show,
            CommandArg::Capture => Action::Capture,
            CommandArg::Image { id } => Action::Image(id),
            CommandArg::Settings => Action::Settings,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, api_base={:?}, command={:?}",
        args.config,
        args.api_base,
        args.command
    );

    let config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    let config = config.apply_overrides(ConfigOverrides {
        env_api_base: std::env::var(API_BASE_ENV).ok(),
        api_base: args.api_base,
        per_page: args.per_page,
        date: args.date,
        utc: args.utc,
    })?;

    let action = args.command.map(Action::from).unwrap_or(Action::Browse);
    tracing::info!("Starting petcam-viewer against {}", config.api_base);

    petcam_viewer::run(config, action).await?;

    Ok(())
}
