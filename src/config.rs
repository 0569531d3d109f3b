//! Configuration management for the Livros server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body, in bytes
    pub body_limit: usize,
    /// Plain text answered on `/`
    pub welcome_message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// How the repository picks the id of an inserted book
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `count + 1` at insertion time; ids freed by deletions get reused
    #[default]
    Count,
    /// Counter that only moves forward
    Monotonic,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BooksConfig {
    /// Start with the three built-in records
    pub seed: bool,
    pub id_strategy: IdStrategy,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub books: BooksConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8888)?
            .set_default("server.body_limit", 2 * 1024 * 1024)?
            .set_default("server.welcome_message", "Welcome")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("books.seed", true)?
            .set_default("books.id_strategy", "count")?
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. LIVROS_SERVER__PORT=9000
            .add_source(
                Environment::with_prefix("LIVROS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
            body_limit: 2 * 1024 * 1024,
            welcome_message: "Welcome".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            seed: true,
            id_strategy: IdStrategy::Count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_port() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8888);
        assert_eq!(config.server.welcome_message, "Welcome");
        assert!(config.books.seed);
        assert_eq!(config.books.id_strategy, IdStrategy::Count);
    }

    #[test]
    fn test_id_strategy_deserializes_lowercase() {
        let strategy: IdStrategy = serde_json::from_str("\"monotonic\"").unwrap();
        assert_eq!(strategy, IdStrategy::Monotonic);
    }
}
