//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRISONA_SESSION_FILE` - Where the CLI keeps the saved session
//!   (default: .prisona/session.json)
//! - `PRISONA_LATENCY_MS` - Simulated backend delay in milliseconds (default: 800)
//! - `PRISONA_CURRENCY` - Currency for the demo catalog (default: INR)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use prisona_core::CurrencyCode;

const DEFAULT_SESSION_FILE: &str = ".prisona/session.json";
const DEFAULT_LATENCY_MS: &str = "800";
const DEFAULT_CURRENCY: &str = "INR";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// File backing the saved session
    pub session_file: PathBuf,
    /// Delay applied to every simulated backend call
    pub latency: Duration,
    /// Currency the catalog is priced in
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            latency: Duration::from_millis(800),
            currency: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let session_file = PathBuf::from(get_or_default(
            &lookup,
            "PRISONA_SESSION_FILE",
            DEFAULT_SESSION_FILE,
        ));

        let latency_ms = get_or_default(&lookup, "PRISONA_LATENCY_MS", DEFAULT_LATENCY_MS)
            .trim()
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PRISONA_LATENCY_MS".to_string(), e.to_string())
            })?;

        let currency = get_or_default(&lookup, "PRISONA_CURRENCY", DEFAULT_CURRENCY)
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRISONA_CURRENCY".to_string(), e))?;

        Ok(Self {
            session_file,
            latency: Duration::from_millis(latency_ms),
            currency,
        })
    }

    /// Same configuration with no simulated delay.
    #[must_use]
    pub fn without_latency(self) -> Self {
        Self {
            latency: Duration::ZERO,
            ..self
        }
    }
}

/// Get a variable, falling back to `default` when unset or blank.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
