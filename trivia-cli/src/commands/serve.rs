//! HTTP server command
//!
//! Runs the trivia API against PostgreSQL, or against an in-memory store
//! optionally seeded from a fixture file.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, MemoryStore, PgStore};
use trivia_server::{run_server, AppState};

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Allowed CORS origin (repeatable; default: any origin)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,

    /// Serve from an in-memory store instead of PostgreSQL
    #[arg(long, conflicts_with = "database_url")]
    pub in_memory: bool,

    /// JSON fixture file to seed the in-memory store
    #[arg(long, value_name = "PATH", requires = "in_memory")]
    pub fixtures: Option<PathBuf>,
}

impl ServeArgs {
    /// Overlay command-line flags onto the resolved configuration.
    fn apply(&self, config: &mut TriviaConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            config.database.max_connections = max;
        }
        if !self.cors_origins.is_empty() {
            config.server.cors_origins = self.cors_origins.clone();
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: TriviaConfig) -> Result<()> {
    args.apply(&mut config);

    let state = if args.in_memory {
        let store = match &args.fixtures {
            Some(path) => MemoryStore::from_fixture_file(path)
                .await
                .context(format!("Failed to load fixtures from {}", path.display()))?,
            None => MemoryStore::new(),
        };
        tracing::warn!("Using in-memory store - changes are lost on shutdown");
        AppState::new(store)
    } else {
        let database_url = config.database.url.clone().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.trivia/config.toml",
        )?;

        let pool = create_pool_with_options(&database_url, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;
        tracing::info!(max_connections = config.database.max_connections, "Database pool ready");
        AppState::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", config.server.bind);

    // Run server (blocks until shutdown)
    run_server(state, config.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
