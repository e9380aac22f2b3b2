//! Volt CLI - Operator tool for the VoltMart backend.
//!
//! Commands:
//! - `volt seed` - Populate the store with sample catalog data
//! - `volt create-admin` - Create an administrator account

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CreateAdminArgs, SeedArgs};

/// Volt CLI - Manage a VoltMart store file
#[derive(Parser)]
#[command(name = "volt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate the store with sample products, inventory, and services
    Seed(SeedArgs),

    /// Create an administrator account
    CreateAdmin(CreateAdminArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose);

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::run(args, &output).await,
        Commands::CreateAdmin(args) => commands::create_admin::run(args, &output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
