//! Configuration for the trivia CLI
//!
//! Resolution order, later wins:
//! 1. built-in defaults
//! 2. TOML file (`--config`, else `~/.trivia/config.toml` when it exists)
//! 3. environment (`DATABASE_URL`, `TRIVIA_BIND`, `TRIVIA_CORS_ORIGINS`, `TRIVIA_MAX_CONNECTIONS`)
//! 4. command-line flags (applied by each command)

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::ServerConfig;

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// Empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: defaults.bind_addr,
            cors_origins: defaults.cors_origins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl TriviaConfig {
    /// Default config location: ~/.trivia/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia")
            .join("config.toml")
    }

    /// Load file and environment layers.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).context(format!("Failed to parse config file (invalid TOML): {:?}", path))
    }

    /// Overlay values from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = Some(url);
        }

        if let Some(bind) = lookup("TRIVIA_BIND") {
            self.server.bind = bind
                .parse()
                .context(format!("TRIVIA_BIND is not a socket address: {}", bind))?;
        }

        if let Some(origins) = lookup("TRIVIA_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_owned)
                .collect();
        }

        if let Some(max) = lookup("TRIVIA_MAX_CONNECTIONS") {
            self.database.max_connections = max
                .parse()
                .context(format!("TRIVIA_MAX_CONNECTIONS is not a number: {}", max))?;
        }

        Ok(())
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind,
            cors_origins: self.server.cors_origins.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration as TOML
    Show,
    /// Show default config file path
    Path,
}

pub fn run_config(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let mut rendered = TriviaConfig::load(explicit)?;
            // Credentials live in the URL
            if rendered.database.url.is_some() {
                rendered.database.url = Some("<set>".to_owned());
            }
            print!("{}", toml::to_string_pretty(&rendered).context("Failed to render config")?);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", TriviaConfig::config_path().display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_server_defaults() {
        let config = TriviaConfig::default();
        assert_eq!(config.server.bind.port(), 5000);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn parses_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:8080\"\n\n[database]\nurl = \"postgres://localhost/trivia\""
        )
        .unwrap();

        let config = TriviaConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.bind.port(), 8080);
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/trivia"));
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn env_overrides_file() {
        let mut config = TriviaConfig::default();
        config
            .apply_env(lookup(&[
                ("DATABASE_URL", "postgres://db/trivia_test"),
                ("TRIVIA_BIND", "127.0.0.1:9000"),
                ("TRIVIA_CORS_ORIGINS", "http://localhost:3000, http://127.0.0.1:3000"),
            ]))
            .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("postgres://db/trivia_test"));
        assert_eq!(config.server.bind.port(), 9000);
        assert_eq!(config.server.cors_origins.len(), 2);
    }

    #[test]
    fn invalid_bind_is_an_error() {
        let mut config = TriviaConfig::default();
        let err = config.apply_env(lookup(&[("TRIVIA_BIND", "nowhere")])).unwrap_err();
        assert!(err.to_string().contains("TRIVIA_BIND"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = TriviaConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
