//! Configuration system for the Taskboard server.
//!
//! Supports layered configuration with the following priority (highest
//! first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (passed with `--config`)
//! 4. Compiled defaults

use std::path::PathBuf;

/// Default bind address when nothing else is configured.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default `PostgreSQL` connection URL.
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/taskboard";

/// Errors that can occur when loading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerConfigFile {
    server: ServerFileSection,
}

/// `[server]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileSection {
    bind_addr: Option<String>,
    database_url: Option<String>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the Taskboard server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Taskboard task-tracking server")]
pub struct CliArgs {
    /// Address to bind the server to.
    #[arg(short, long, env = "TASKBOARD_ADDR")]
    pub bind: Option<String>,

    /// `PostgreSQL` connection URL.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKBOARD_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub bind_addr: String,
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Log level filter.
    pub log_level: String,
}

impl ServerConfig {
    /// Resolves the configuration from CLI arguments, the optional config
    /// file, and compiled defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the config file cannot be read or
    /// parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
                        path: path.clone(),
                        source,
                    })?;
                toml::from_str::<ServerConfigFile>(&contents)?
            }
            None => ServerConfigFile::default(),
        };

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or(file.server.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            database_url: cli
                .database_url
                .clone()
                .or(file.server.database_url)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            log_level: cli.log_level.clone(),
        })
    }
}
