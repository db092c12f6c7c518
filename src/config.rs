//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Variables may also come from a `.env` file loaded by `dotenvy` in `main.rs`.
//!
//! ## Layout Variables
//!
//! ```bash
//! export NAV_VARIANT="responsive"                       # simple | responsive
//! export BRAND_NAME="Store Front"
//! export NAV_EXTRA_LINKS="About=#about,Contact=#contact"
//! ```
//!
//! Extra links are appended after the built-in Home and Products links and
//! must not repeat an existing label or target.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `NAV_VARIANT` - Navigation bar variant (default: `simple`)
//! - `BRAND_NAME` - Store name in nav and footer (default: `Store Front`)
//! - `NAV_EXTRA_LINKS` - Additional `Label=#target` links (default: none)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::entities::brand::DEFAULT_BRAND_NAME;
use crate::domain::entities::{NavLinks, NavVariant};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Navigation bar mounted by the layout. Fixed for the process lifetime.
    pub nav_variant: NavVariant,
    pub brand_name: String,
    /// Built-in links followed by any `NAV_EXTRA_LINKS`.
    pub nav_links: NavLinks,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `NAV_VARIANT` is unknown or `NAV_EXTRA_LINKS`
    /// is malformed or collides with the built-in links.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let nav_variant = match env::var("NAV_VARIANT") {
            Ok(v) => v.parse::<NavVariant>().context("Invalid NAV_VARIANT")?,
            Err(_) => NavVariant::default(),
        };

        let brand_name = env::var("BRAND_NAME")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_BRAND_NAME.to_string());

        let nav_links = Self::load_nav_links().context("Invalid NAV_EXTRA_LINKS")?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            nav_variant,
            brand_name,
            nav_links,
            static_dir,
        })
    }

    /// Builds the link set: built-in links, then `NAV_EXTRA_LINKS` in order.
    fn load_nav_links() -> Result<NavLinks> {
        let links = NavLinks::storefront();

        match env::var("NAV_EXTRA_LINKS") {
            Ok(raw) => Ok(links.extended(NavLinks::parse_list(&raw)?)?),
            Err(_) => Ok(links),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `brand_name` or `static_dir` is empty
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

        if self.brand_name.trim().is_empty() {
            anyhow::bail!("BRAND_NAME must not be empty");
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Navigation variant: {}", self.nav_variant);
        tracing::info!("  Brand: {}", self.brand_name);
        tracing::info!(
            "  Navigation links: {}",
            self.nav_links
                .iter()
                .map(|l| format!("{}->{}", l.label(), l.target()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        tracing::info!("  Static dir: {}", self.static_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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
