//! Configuration management for sitemapx.
//!
//! Parses `sitemapx.toml` files with serde. Every key is optional and
//! carries a default; an absent file section falls back wholesale.
//!
//! ```toml
//! prepend_loc_url = true
//! prepend_image_loc_url = true
//! debug = false
//!
//! [site]
//! domain = "example.com"
//! scheme = "http"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 7979
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sitemapx::{ChangeFreq, Site};

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Prepend the site's scheme and domain to page location URLs.
    pub prepend_loc_url: bool,
    /// Prepend the site's scheme and domain to image location URLs.
    pub prepend_image_loc_url: bool,
    /// Enable debug behavior (verbose skip logging).
    pub debug: bool,
    /// Recognized change-frequency values for free-form input.
    pub changefreq_values: Vec<String>,
    /// Site identity.
    pub site: SiteConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            prepend_loc_url: true,
            prepend_image_loc_url: true,
            debug: false,
            changefreq_values: ChangeFreq::ALL
                .iter()
                .map(|f| f.as_str().to_owned())
                .collect(),
            site: SiteConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host name used when building absolute URLs.
    pub domain: String,
    /// URL scheme, without the `://` separator.
    pub scheme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            scheme: "http".to_owned(),
        }
    }
}

impl SiteConfig {
    /// The configured [`Site`].
    #[must_use]
    pub fn site(&self) -> Site {
        Site::with_scheme(self.scheme.clone(), self.domain.clone())
    }
}

/// HTTP server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl SitemapConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string without validating.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate loaded values.
    ///
    /// The domain must be non-empty and every entry of
    /// `changefreq_values` must be a protocol value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.domain.is_empty() {
            return Err(ConfigError::Validation(
                "site.domain cannot be empty".to_owned(),
            ));
        }
        for value in &self.changefreq_values {
            ChangeFreq::from_str(value).map_err(|_| {
                ConfigError::Validation(format!(
                    "changefreq_values contains unrecognized value {value:?}"
                ))
            })?;
        }
        Ok(())
    }
}
