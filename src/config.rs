//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable has a default, so the service runs with no environment at all.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DATA_FILE` - Visit record file (default: `data/visits.json`)
//! - `STATIC_DIR` - Directory served for unmatched paths (default: `public`)
//! - `SESSION_SECRET` - HMAC key for session cookies (default: `visitas_secreto_2024`)
//! - `SESSION_TTL_SECONDS` - Session lifetime (default: 3600)
//! - `COOKIE_SECURE` - Mark the session cookie `Secure` (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// JSON file holding the visit record.
    pub data_file: PathBuf,
    /// Directory of static files served for unmatched paths.
    pub static_dir: PathBuf,
    /// HMAC key used to sign session cookies. Must be non-empty.
    pub session_secret: String,
    /// Lifetime of a session from login, in seconds.
    pub session_ttl_seconds: u64,
    /// When true, the session cookie carries the `Secure` attribute.
    /// Enable only when the service is reached over HTTPS.
    pub cookie_secure: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so callers do not change when a
    /// required variable is introduced.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/visits.json"));
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| "visitas_secreto_2024".to_string());

        let session_ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            data_file,
            static_dir,
            session_secret,
            session_ttl_seconds,
            cookie_secure,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `session_secret` is empty
    /// - `session_ttl_seconds` is zero or larger than 30 days
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_secret.is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }

        if self.session_ttl_seconds == 0 {
            anyhow::bail!("SESSION_TTL_SECONDS must be greater than 0");
        }

        if self.session_ttl_seconds > 30 * 24 * 3600 {
            anyhow::bail!(
                "SESSION_TTL_SECONDS is too large (max: 2592000), got {}",
                self.session_ttl_seconds
            );
        }

        if self.data_file.as_os_str().is_empty() {
            anyhow::bail!("DATA_FILE must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without the session secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!("  Session secret: {}", mask_secret(&self.session_secret));
        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Secure cookie: {}", self.cookie_secure);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Keeps the first two characters of a secret and masks the rest.
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(2).collect();
    format!("{}***", visible)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
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
