//! esi - ESI client command line
//!
//! Reads and updates the client settings and calls the ESI endpoints
//! exposed by the library. Results are printed to stdout as pretty JSON;
//! logs go to stderr.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "esi")]
#[command(about = "Query the EVE Online ESI API and manage client settings")]
#[command(version)]
struct Cli {
    /// Project config file (defaults to `$ESI_CONFIG_PATH`, then `./esi.json`)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show or update the client settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// List all alliance IDs
    Alliances,

    /// Look up the corporation, alliance and faction of characters
    Affiliation {
        /// Character IDs
        #[arg(allow_negative_numbers = true)]
        ids: Vec<i64>,
    },

    /// Show the corporation history of a character
    CorpHistory {
        /// Character ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Wait for the given number of milliseconds
    Sleep {
        /// Delay in milliseconds
        millis: u64,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCommands {
    /// Print the active settings
    Show,

    /// Merge the given values into the project config
    Set {
        /// Release channel (latest, legacy, dev, v1 ... v6)
        #[arg(long)]
        route: Option<String>,

        /// Bearer token sent with every request
        #[arg(long)]
        token: Option<String>,

        /// Accept-Language sent with every request
        #[arg(long)]
        language: Option<String>,

        /// Name sent as X-User-Agent
        #[arg(long)]
        project_name: Option<String>,

        /// Create the project config if it does not exist
        #[arg(long)]
        create: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    commands::execute(cli).await
}
