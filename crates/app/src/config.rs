//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `MARKET_CATALOG_STORAGE_PATH` - Key-value storage file (default: .market-catalog/storage.json)
//! - `GEMINI_API_KEY` - Generative Language API key; without it suggestions use the fallback text
//! - `GEMINI_MODEL` - Model ID (default: gemini-3-flash-preview)
//! - `GEMINI_BASE_URL` - API root (default: <https://generativelanguage.googleapis.com>)
//! - `GEMINI_TIMEOUT_SECS` - Request timeout in seconds (default: 15)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate, 0.0 to 1.0 (default: 0.0)
//! - `MARKET_CATALOG_LOG_FORMAT` - `json` for JSON log lines (default: human-readable)

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_STORAGE_PATH: &str = ".market-catalog/storage.json";
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 15;

/// Fragments of `.env` template values, matched case-insensitively.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "api-key-here",
    "changeme",
    "placeholder",
    "example",
    "xxx",
    "insert",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// File backing the durable key-value storage
    pub storage_path: PathBuf,
    /// Description suggestion service configuration
    pub suggestion: SuggestionConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

/// Description suggestion (Gemini) configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct SuggestionConfig {
    /// API key; `None` means every suggestion resolves to the fallback text
    pub api_key: Option<SecretString>,
    /// Model ID
    pub model: String,
    /// API root URL
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for SuggestionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: default_base_url(),
            timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or the API key looks
    /// like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path =
            PathBuf::from(get_env_or_default("MARKET_CATALOG_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let suggestion = SuggestionConfig::from_env()?;

        Ok(Self {
            storage_path,
            suggestion,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: parse_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
            log_json: get_optional_env("MARKET_CATALOG_LOG_FORMAT")
                .is_some_and(|format| format.eq_ignore_ascii_case("json")),
        })
    }
}

impl SuggestionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = get_optional_env("GEMINI_API_KEY")
            .map(|key| {
                check_api_key(&key)?;
                Ok(SecretString::from(key))
            })
            .transpose()?;

        let base_url = get_env_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
        let base_url = Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("GEMINI_BASE_URL".to_string(), e.to_string()))?;

        let timeout = get_optional_env("GEMINI_TIMEOUT_SECS")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GEMINI_TIMEOUT_SECS".to_string(), e.to_string())
            })?
            .unwrap_or(DEFAULT_GEMINI_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            base_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

#[allow(clippy::expect_used)] // constant URL
fn default_base_url() -> Url {
    Url::parse(DEFAULT_GEMINI_BASE_URL).expect("default Gemini base URL is valid")
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse a 0.0-1.0 sample rate.
fn parse_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = get_optional_env(key) else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("{rate} is outside 0.0..=1.0"),
        ))
    }
}

/// Shannon entropy of `key`, in bits per character.
fn entropy_per_char(key: &str) -> f64 {
    let mut counts: HashMap<char, u32> = HashMap::new();
    let mut total = 0_u32;
    for c in key.chars() {
        *counts.entry(c).or_default() += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = f64::from(total);
    counts
        .values()
        .map(|&n| f64::from(n) / total)
        .map(|p| -p * p.log2())
        .sum()
}

/// Reject a Gemini key copied from a template or too uniform to have been
/// issued by Google.
fn check_api_key(key: &str) -> Result<(), ConfigError> {
    let insecure =
        |reason: String| ConfigError::InsecureSecret("GEMINI_API_KEY".to_string(), reason);

    let lower = key.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(**p)) {
        return Err(insecure(format!("looks like a placeholder ('{pattern}')")));
    }

    let bits = entropy_per_char(key);
    if bits < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(insecure(format!(
            "{bits:.2} bits/char is below the {MIN_ENTROPY_BITS_PER_CHAR:.1} expected of an issued key"
        )));
    }
    Ok(())
}
