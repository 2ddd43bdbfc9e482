//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//!
//! Speech engine settings live in the speech crate and are embedded here as
//! the `speech` section.

mod server;

use serde::{Deserialize, Serialize};
use speech::SpeechConfig;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech engine configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence, lowest to highest: built-in defaults, `config.toml` in the
    /// working directory (if present), `VOCALIZE_*` environment variables
    /// (e.g. `VOCALIZE_SERVER_PORT=8080`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("speech.provider", "gtts")?
            .set_default("speech.language", "en")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., VOCALIZE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("VOCALIZE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
