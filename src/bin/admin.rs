//! CLI administration tool for url-shortener.
//!
//! Operates on the configured key-value store through the same services as the
//! HTTP server, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/article
//!
//! # Look up a short identifier
//! cargo run --bin admin -- resolve ab12cd34
//!
//! # Check the storage backend
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`url_shortener::config`].

use url_shortener::AppError;
use url_shortener::config;
use url_shortener::server::connect_store;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::UuidIdGenerator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short URL for a long URL
    Shorten {
        /// The URL to shorten
        long_url: String,
    },

    /// Show the long URL stored under a short identifier
    Resolve {
        /// The 8-character short identifier
        short_url_id: String,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Storage diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the storage backend connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let store = connect_store(&config).await?;
    let state = AppState::new(
        store,
        Arc::new(UuidIdGenerator),
        &config.base_url,
        config.id_generation_attempts,
    );

    match cli.command {
        Commands::Shorten { long_url } => shorten(&state, &long_url).await?,
        Commands::Resolve { short_url_id } => resolve(&state, &short_url_id).await?,
        Commands::Db { action } => handle_db_action(action, &state).await?,
    }

    Ok(())
}

/// Creates a mapping and prints the short URL.
async fn shorten(state: &AppState, long_url: &str) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let short_url = state
        .creation_service
        .shorten(long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", describe(&e)))?;

    println!("  Long URL:  {}", long_url.cyan());
    println!("  Short URL: {}", short_url.bright_yellow().bold());
    println!();
    println!("{}", "✅ Mapping created".green().bold());

    Ok(())
}

/// Prints the stored long URL, or a not-found notice.
async fn resolve(state: &AppState, short_url_id: &str) -> Result<()> {
    println!("{}", "🔎 Resolve short URL".bright_blue().bold());
    println!();

    match state.resolution_service.resolve(short_url_id).await {
        Ok(long_url) => {
            println!("  {} -> {}", short_url_id.cyan(), long_url.bright_white());
        }
        Err(AppError::NotFound { .. }) => {
            println!(
                "{}",
                format!("  No mapping found for {}", short_url_id).yellow()
            );
        }
        Err(e) => anyhow::bail!("Lookup failed: {}", describe(&e)),
    }
    println!();

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    match action {
        DbAction::Check => {
            let backend = state.store.backend_name();
            println!(
                "{}",
                format!("🔎 Checking {} connection...", backend).bright_blue()
            );

            if !state.store.health_check().await {
                anyhow::bail!("{} health check failed", backend);
            }

            println!(
                "{}",
                format!("✅ {} connection OK", backend).green().bold()
            );
        }
    }

    Ok(())
}

/// Formats an error together with its underlying storage cause, if any.
fn describe(e: &AppError) -> String {
    match e {
        AppError::Storage { message, source } => format!("{} ({})", message, source),
        other => other.to_string(),
    }
}
