//! tasklist CLI - runs the task API server
//!
//! - `serve`: connect to PostgreSQL and serve the HTTP API
//! - `migrate`: create the tasks table and exit
//!
//! Settings come from flags or the environment; a `.env` file in the
//! working directory is loaded first and never overrides variables that are
//! already set.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "tasklist",
    author,
    version,
    about = "Task management HTTP API backed by PostgreSQL"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the tasks table if it does not exist
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
