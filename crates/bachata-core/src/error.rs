//! Error types for the bachata-core crate.
//!
//! The filter engine and state transitions cannot fail; the only fallible
//! core operation is loading configuration.

use camino::Utf8PathBuf;

/// Errors that can occur while loading or validating configuration.
///
/// # Examples
///
/// ```
/// use bachata_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "tui.frame_rate".to_owned(),
///     reason: "must be greater than zero".to_owned(),
/// };
/// assert!(error.to_string().contains("tui.frame_rate"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
