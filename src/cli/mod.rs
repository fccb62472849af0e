pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "inotebook")]
#[command(about = "iNotebook CLI - database and token utilities for the notes API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the notes table and indexes if missing")]
    Migrate,

    #[command(about = "Mint a signed caller token for a user id (development helper)")]
    Token {
        #[arg(long, help = "User id to embed in the token")]
        user: String,
        #[arg(long, help = "Hours until expiry (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
        #[arg(long, conflicts_with = "hours", help = "Issue a token without an expiry")]
        no_expiry: bool,
    },

    #[command(about = "Connect to the database and run the health check")]
    Check,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::Token { user, hours, no_expiry } => {
            commands::token::handle(&user, hours, no_expiry, output_format)
        }
        Commands::Check => commands::check::handle(output_format).await,
    }
}
