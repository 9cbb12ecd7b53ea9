//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LNS_DATA_DIR` - Directory for the file-backed store (default: `lns-data`)
//! - `CLAUDE_API_KEY` - Anthropic API key; absence disables the AI stylist
//! - `CLAUDE_MODEL` - Claude model ID (default: claude-sonnet-4-20250514)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "lns-data";
const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the file-backed key-value store.
    pub data_dir: PathBuf,
    /// Stylist (Claude) configuration; `None` when no API key is set.
    pub stylist: Option<StylistConfig>,
}

/// Claude AI API configuration for the stylist.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct StylistConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model ID (e.g., claude-sonnet-4-20250514)
    pub model: String,
}

impl std::fmt::Debug for StylistConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StylistConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse. Absent variables
    /// fall back to defaults; in particular a missing `CLAUDE_API_KEY` leaves
    /// the stylist disabled rather than failing.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LNS_DATA_DIR", DEFAULT_DATA_DIR));

        let stylist = get_optional_env("CLAUDE_API_KEY").map(|key| StylistConfig {
            api_key: SecretString::from(key),
            model: get_env_or_default("CLAUDE_MODEL", DEFAULT_CLAUDE_MODEL),
        });

        Ok(Self { data_dir, stylist })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylist_config_debug_redacts_api_key() {
        let config = StylistConfig {
            api_key: SecretString::from("sk-ant-very-secret"),
            model: DEFAULT_CLAUDE_MODEL.to_owned(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("very-secret"));
    }
}
