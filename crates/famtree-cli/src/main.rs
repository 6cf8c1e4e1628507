//! famtree CLI
//!
//! Command-line interface for the family member store

use clap::{Parser, Subcommand};
use famtree_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "famtree")]
#[command(about = "famtree - family member records", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "FAMTREE_DB", default_value = ".famtree/store.db")]
    db: PathBuf,

    /// Log output: dev (human-readable) or prod (JSON)
    #[arg(long, global = true, env = "FAMTREE_LOG_FORMAT", default_value = "dev")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    Migrate,
    /// Family member operations
    Member(commands::member::MemberArgs),
}

fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    let result = match cli.command {
        Commands::Migrate => commands::migrate::execute(&cli.db),
        Commands::Member(args) => commands::member::execute(&cli.db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
