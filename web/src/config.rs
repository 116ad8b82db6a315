//! Configuration management for the webhook server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! The platform public key is the one required setting: without it the
//! process must refuse to start, since every inbound request would be
//! unverifiable.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hex-encoded Ed25519 public key published by the platform.
    pub public_key: String,
    /// HTTP server configuration.
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Startup-time configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform public key is not configured.
    #[error("DISCORD_PUBLIC_KEY environment variable is not set")]
    MissingPublicKey,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPublicKey`] when `DISCORD_PUBLIC_KEY`
    /// is absent. Key *validity* is checked later, when the verifier is
    /// built; both conditions are fatal before the server binds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_key =
            env::var("DISCORD_PUBLIC_KEY").map_err(|_| ConfigError::MissingPublicKey)?;

        Ok(Self {
            public_key,
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
            },
        })
    }

    /// Address string the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
