//! Hands outbound links to the user's browser.
//!
//! The browser is spawned detached so it outlives the TUI and never writes
//! to the terminal the interface owns.

use tracing::{debug, info};

use crate::error::TuiError;

/// Opens `url` with `browser`, or with the system default handler when no
/// browser is configured.
pub fn open_link(url: &str, browser: Option<&str>) -> Result<(), TuiError> {
    let result = match browser {
        Some(program) => {
            debug!(program, "Opening link with configured browser");
            open::with_detached(url, program)
        }
        None => open::that_detached(url),
    };

    result.map_err(|source| TuiError::Link {
        url: url.to_owned(),
        source,
    })?;

    info!(url, "Link opened");
    Ok(())
}
