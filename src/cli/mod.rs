pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER: &str = "http://localhost:5001";

#[derive(Parser)]
#[command(name = "mastery")]
#[command(about = "Mastery CLI - development tooling for the Mastery API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign a development token with JWT_SECRET")]
    Token {
        #[arg(long, help = "Subject (user id) claim")]
        sub: String,
        #[arg(long, default_value = "user", help = "Role claim")]
        role: String,
        #[arg(long, help = "Hours until expiry (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },

    #[command(about = "Check server health via /api/health")]
    Health {
        #[arg(long, default_value = DEFAULT_SERVER, help = "Server URL")]
        server: String,
    },

    #[command(about = "Show the claims of a token via /api/auth/whoami")]
    Whoami {
        #[arg(long, default_value = DEFAULT_SERVER, help = "Server URL")]
        server: String,
        #[arg(long, env = "MASTERY_TOKEN", help = "Credential token")]
        token: String,
    },

    #[command(about = "Show admin status via /api/admin/status")]
    Admin {
        #[arg(long, default_value = DEFAULT_SERVER, help = "Server URL")]
        server: String,
        #[arg(long, env = "MASTERY_TOKEN", help = "Credential token")]
        token: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
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
        Commands::Token { sub, role, hours } => commands::token::handle(&sub, &role, hours, output_format),
        Commands::Health { server } => commands::remote::health(&server, output_format).await,
        Commands::Whoami { server, token } => commands::remote::whoami(&server, &token, output_format).await,
        Commands::Admin { server, token } => commands::remote::admin(&server, &token, output_format).await,
    }
}
