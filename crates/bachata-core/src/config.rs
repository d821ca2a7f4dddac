//! Configuration structures for the Bachata Database.
//!
//! - [`TuiConfig`] - Terminal UI settings (tick rate, frame rate, animation)
//! - [`LinkConfig`] - How outbound search links are opened
//! - [`Config`] - Root configuration combining all settings
//!
//! Every type implements [`Default`], and every field is optional in the
//! JSON file.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use bachata_core::TuiConfig;
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert!(config.entrance_animation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Interval between tick events in milliseconds.
    ///
    /// Ticks drive the disc animation and status message expiry.
    pub tick_rate_ms: u64,

    /// Frames rendered per second.
    pub frame_rate: u32,

    /// Whether list rows fade in after startup.
    pub entrance_animation: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            entrance_animation: true,
        }
    }
}

/// Configuration for opening outbound links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Program used to open links. `None` uses the system default handler.
    pub browser: Option<String>,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use bachata_core::Config;
///
/// let config = Config::from_json_str(r#"{"tui": {"frame_rate": 60}}"#).unwrap();
/// assert_eq!(config.tui.frame_rate, 60);
/// assert_eq!(config.tui.tick_rate_ms, 250);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal UI configuration.
    pub tui: TuiConfig,

    /// Outbound link configuration.
    pub link: LinkConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        debug!(path = %path, "Loading configuration");
        let contents = std::fs::read_to_string(path.as_std_path())?;
        Self::from_json_str(&contents)
    }

    /// Checks option values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidOption {
                option: "tui.tick_rate_ms".to_owned(),
                reason: "must be greater than zero".to_owned(),
            });
        }

        if self.tui.frame_rate == 0 {
            return Err(ConfigError::InvalidOption {
                option: "tui.frame_rate".to_owned(),
                reason: "must be greater than zero".to_owned(),
            });
        }

        if self
            .link
            .browser
            .as_deref()
            .is_some_and(|browser| browser.trim().is_empty())
        {
            return Err(ConfigError::InvalidOption {
                option: "link.browser".to_owned(),
                reason: "must not be blank".to_owned(),
            });
        }

        Ok(())
    }
}
