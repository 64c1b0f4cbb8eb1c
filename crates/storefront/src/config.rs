//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `EMBERLINE_HOST` - Bind address (default: 127.0.0.1)
//! - `EMBERLINE_PORT` - Listen port (default: 3000)
//! - `EMBERLINE_CATALOG_FEED` - Path to the JSON product feed exported by
//!   the hosted backend (default: catalog.json)
//! - `EMBERLINE_LOCALE` - Display language for product names (default: en)
//! - `EMBERLINE_CURRENCY` - Primary currency symbol (default: $)
//! - `EMBERLINE_CURRENCY_SECONDARY` - Secondary currency symbol (default: €)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FEED: &str = "catalog.json";
const DEFAULT_LOCALE: &str = "en";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the JSON product feed
    pub catalog_feed: PathBuf,
    /// Display language resolved at feed ingestion
    pub locale: String,
    /// Primary currency symbol for price display
    pub currency: String,
    /// Secondary currency symbol for price display
    pub currency_secondary: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a set variable fails to
    /// parse (host address, port number).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match env::var("EMBERLINE_HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("EMBERLINE_HOST".to_string(), format!("{e}")))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match env::var("EMBERLINE_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("EMBERLINE_PORT".to_string(), format!("{e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let catalog_feed =
            PathBuf::from(env::var("EMBERLINE_CATALOG_FEED").unwrap_or_else(|_| DEFAULT_FEED.to_string()));
        let locale = env::var("EMBERLINE_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
        let currency = env::var("EMBERLINE_CURRENCY").unwrap_or_else(|_| "$".to_string());
        let currency_secondary =
            env::var("EMBERLINE_CURRENCY_SECONDARY").unwrap_or_else(|_| "€".to_string());

        Ok(Self {
            host,
            port,
            catalog_feed,
            locale,
            currency,
            currency_secondary,
        })
    }

    /// The socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            catalog_feed: PathBuf::from(DEFAULT_FEED),
            locale: DEFAULT_LOCALE.to_string(),
            currency: "$".to_string(),
            currency_secondary: "€".to_string(),
        }
    }
}
