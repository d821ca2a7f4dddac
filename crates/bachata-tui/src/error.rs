//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur during TUI operations.

use thiserror::Error;

/// Errors that can occur in the TUI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Standard output is not attached to a terminal, so there is nowhere
    /// to mount the interface.
    #[error("stdout is not a terminal; use `bachata list` for non-interactive output")]
    NotATerminal,

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An outbound link could not be handed to the browser.
    #[error("failed to open {url}: {source}")]
    Link {
        /// The link that failed to open.
        url: String,
        /// Underlying failure from the opener.
        #[source]
        source: std::io::Error,
    },
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// A link that fails to open is reported in the status bar and the
    /// session continues.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}
