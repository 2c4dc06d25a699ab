//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `RESEND_API_KEY` - API key for the transactional email service
//! - `RESEND_FROM_EMAIL` - Sender address for purchase notifications
//! - `RESEND_TO_EMAIL` - Recipient address for purchase notifications
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DRIVE_BASE_URL` - Google Drive download endpoint
//!   (default: `https://drive.google.com/uc`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Bound on every outbound HTTP call
//!   (default: 30, range 1..=300)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Transactional email service API key. Never logged.
    pub resend_api_key: String,
    pub resend_from_email: String,
    pub resend_to_email: String,
    /// Base URL the relay fetches audio files from.
    pub drive_base_url: String,
    /// Bounded timeout applied to every outbound HTTP call, in seconds.
    /// There is deliberately no retry; a timed-out call surfaces as a
    /// distinct error kind.
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required email-service variable is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let resend_api_key =
            env::var("RESEND_API_KEY").context("RESEND_API_KEY must be set")?;
        let resend_from_email =
            env::var("RESEND_FROM_EMAIL").context("RESEND_FROM_EMAIL must be set")?;
        let resend_to_email =
            env::var("RESEND_TO_EMAIL").context("RESEND_TO_EMAIL must be set")?;

        let drive_base_url = env::var("DRIVE_BASE_URL")
            .unwrap_or_else(|_| "https://drive.google.com/uc".to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            resend_api_key,
            resend_from_email,
            resend_to_email,
            drive_base_url,
            upstream_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port` shaped
    /// - email addresses are obviously malformed
    /// - `drive_base_url` is not a valid HTTP(S) URL
    /// - `upstream_timeout_seconds` is outside 1..=300
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

        if self.resend_api_key.is_empty() {
            anyhow::bail!("RESEND_API_KEY must not be empty");
        }

        for (name, value) in [
            ("RESEND_FROM_EMAIL", &self.resend_from_email),
            ("RESEND_TO_EMAIL", &self.resend_to_email),
        ] {
            if !value.contains('@') {
                anyhow::bail!("{} must be an email address, got '{}'", name, value);
            }
        }

        let parsed = url::Url::parse(&self.drive_base_url)
            .with_context(|| format!("DRIVE_BASE_URL is not a valid URL: '{}'", self.drive_base_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "DRIVE_BASE_URL must be http(s), got '{}'",
                self.drive_base_url
            );
        }

        if !(1..=300).contains(&self.upstream_timeout_seconds) {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.upstream_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Email service key: {}", mask_secret(&self.resend_api_key));
        tracing::info!("  Notifications: {} -> {}", self.resend_from_email, self.resend_to_email);
        tracing::info!("  Drive base URL: {}", self.drive_base_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);
    }
}

/// Masks a secret for logging, keeping a short identifying prefix.
///
/// `re_live_abcdef123456` → `re_l***`. Secrets too short to outlast the
/// prefix are masked entirely.
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
