use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// The main entry point for the bookstore application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (optional in deployed envs).
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A minimal HTTP API for a catalog of book records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// The port to bind the HTTP server to.
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

/// Connects to the store, applies migrations, and serves the book routes
/// until the process is stopped.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!(%addr, "bookstore starting");
    web_server::run_server(addr).await
}
