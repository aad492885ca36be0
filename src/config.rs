//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the single forwarding
//! sequence runs. All variables are optional; defaults reproduce the
//! historical addressing of the sibling application.
//!
//! ## Variables
//!
//! - `WIRE_FORMAT` - Outbound wire format: `url-query`, `data-query`, or
//!   `broadcast` (default: `broadcast`)
//! - `TARGET_SCHEME` - URI scheme of the sibling application (default: `tachiyomi`)
//! - `TARGET_HOST` - Host segment of the rewritten URI (default: `deeplink`)
//! - `ACTION_NAMESPACE` - Prefix for the broadcast action name (default: `tachiyomi`)
//! - `ENCODE_QUERY` - Percent-encode the URI embedded in the query parameter
//!   (default: `false`, matching the historical unescaped formats)
//! - `OPENER` - Override for the system opener command (default: platform opener)
//! - `BROADCAST_HANDLER` - Command registered to receive broadcast events
//! - `ORIGIN_PACKAGE` - Default origin package identifier when `--package`
//!   is not given
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::wire::{WireFormat, WireTarget};

/// Forwarder configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub wire_format: WireFormat,
    pub target_scheme: String,
    pub target_host: String,
    pub action_namespace: String,
    /// When true, the source URI is form-urlencoded before being embedded in
    /// the rewritten URI's query parameter. Off by default so downstream
    /// consumers that split the query naively keep receiving the URI
    /// byte-for-byte.
    pub encode_query: bool,
    pub opener: Option<String>,
    pub broadcast_handler: Option<String>,
    pub origin_package: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WIRE_FORMAT` is set to an unknown value.
    pub fn from_env() -> Result<Self> {
        let wire_format = match env::var("WIRE_FORMAT") {
            Ok(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Failed to parse WIRE_FORMAT")?,
            Err(_) => WireFormat::default(),
        };

        let target_scheme =
            env::var("TARGET_SCHEME").unwrap_or_else(|_| "tachiyomi".to_string());
        let target_host = env::var("TARGET_HOST").unwrap_or_else(|_| "deeplink".to_string());
        let action_namespace =
            env::var("ACTION_NAMESPACE").unwrap_or_else(|_| "tachiyomi".to_string());

        let encode_query = env::var("ENCODE_QUERY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let opener = env::var("OPENER").ok();
        let broadcast_handler = env::var("BROADCAST_HANDLER").ok();
        let origin_package = env::var("ORIGIN_PACKAGE").ok();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            wire_format,
            target_scheme,
            target_host,
            action_namespace,
            encode_query,
            opener,
            broadcast_handler,
            origin_package,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `target_scheme`, `target_host`, or `action_namespace` is empty or
    ///   contains URI delimiter characters
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("TARGET_SCHEME", &self.target_scheme),
            ("TARGET_HOST", &self.target_host),
            ("ACTION_NAMESPACE", &self.action_namespace),
        ] {
            if value.is_empty() {
                anyhow::bail!("{} must not be empty", name);
            }
            if value.contains([':', '/', '?', '#', ' ']) {
                anyhow::bail!("{} must not contain URI delimiters, got '{}'", name, value);
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns the addressing parameters for outbound event construction.
    pub fn wire_target(&self) -> WireTarget {
        WireTarget {
            format: self.wire_format,
            scheme: self.target_scheme.clone(),
            host: self.target_host.clone(),
            action_namespace: self.action_namespace.clone(),
            encode_query: self.encode_query,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Wire format: {}", self.wire_format);
        tracing::debug!("  Target: {}://{}", self.target_scheme, self.target_host);
        tracing::debug!("  Action namespace: {}", self.action_namespace);
        tracing::debug!("  Encode query: {}", self.encode_query);

        if let Some(ref handler) = self.broadcast_handler {
            tracing::debug!("  Broadcast handler: {}", handler);
        } else {
            tracing::debug!("  Broadcast handler: not registered");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable has an invalid value.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
