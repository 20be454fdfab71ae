//! CLI administration tool for shortkey.
//!
//! Talks to the configured record store directly, without going through the
//! HTTP gateway. Useful for seeding links, checking what a key points to, and
//! verifying store connectivity from a deployment host.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- create https://example.com/some/long/path
//!
//! # Look up a key
//! cargo run --bin admin -- resolve aZ3kP9q
//!
//! # Check store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `ELASTICACHE_CLUSTER_ENDPOINT` or `REDIS_URL` for the
//! store, `ENDPOINT` or `PUBLIC_BASE_URL` for composed short URLs.

use shortkey::application::services::ShortenerService;
use shortkey::config;
use shortkey::domain::errors::ShortenerError;
use shortkey::domain::repositories::RecordStore;
use shortkey::server::{build_service, build_store};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortkey.
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
    /// Create a short link for a URL
    Create {
        /// Absolute http(s) URL to shorten
        url: String,
    },

    /// Resolve a short key to its URL
    Resolve {
        /// Short key (7 base62 characters, or a 10-character legacy key)
        key: String,
    },

    /// Record store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Record store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = build_store(&config).await?;

    match cli.command {
        Commands::Create { url } => {
            let service = build_service(&config, store);
            handle_create(&service, &url).await?;
        }
        Commands::Resolve { key } => {
            let service = build_service(&config, store);
            handle_resolve(&service, &key).await?;
        }
        Commands::Store { action } => handle_store_action(action, store).await?,
    }

    Ok(())
}

async fn handle_create(service: &ShortenerService, url: &str) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    match service.create(url).await {
        Ok(link) => {
            println!("  Key:       {}", link.key.bright_green().bold());
            println!("  Short URL: {}", link.short_url.cyan());
            println!("  Long URL:  {}", link.long_url.bright_black());
            println!();
            Ok(())
        }
        Err(ShortenerError::InvalidInput(reason)) => {
            println!("{} {}", "❌ Invalid URL:".red(), reason);
            bail!("invalid input")
        }
        Err(e) => Err(e.into()),
    }
}

async fn handle_resolve(service: &ShortenerService, key: &str) -> Result<()> {
    println!("{}", "🔍 Resolve Key".bright_blue().bold());
    println!();

    match service.resolve(key).await {
        Ok(long_url) => {
            println!("  {} → {}", key.cyan(), long_url.bright_white());
            println!();
            Ok(())
        }
        Err(ShortenerError::NotFound | ShortenerError::InvalidInput(_)) => {
            println!("{}", format!("⚠️  No link for key '{}'", key).yellow());
            bail!("key not found")
        }
        Err(e) => Err(e.into()),
    }
}

/// Handles record store diagnostic commands.
async fn handle_store_action(action: StoreAction, store: Arc<dyn RecordStore>) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            if !store.health_check().await {
                println!("{}", "❌ Store did not answer".red().bold());
                bail!("store health check failed");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
