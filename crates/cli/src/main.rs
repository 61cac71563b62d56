//! Galleria CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Bring the shop database schema up to date
//! galleria-cli migrate
//!
//! # Create an admin account out-of-band
//! galleria-cli admin create -u staff -p "a proper password" -n "Staff Member"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Create admin accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "galleria-cli")]
#[command(author, version, about = "Galleria CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Admin login name
        #[arg(short, long)]
        username: String,

        /// Admin password (hashed before storage)
        #[arg(short, long)]
        password: String,

        /// Admin display name
        #[arg(short = 'n', long)]
        full_name: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                username,
                password,
                full_name,
            } => {
                commands::admin::create_account(&username, &password, &full_name).await?;
            }
        },
    }
    Ok(())
}
