//! Terminal user interface for the Bachata Database.
//!
//! This crate renders the catalog as an interactive TUI: an async event
//! loop with tokio, a searchable and filterable song table, a now-playing
//! panel, and mouse support.
//!
//! # Architecture
//!
//! ```text
//! crates/bachata-tui/src/
//!   lib.rs            # Public API exports and the run loop
//!   app.rs            # Application state, input handling, animations
//!   event.rs          # Event types (Key, Mouse, Paste, Tick, Render)
//!   tui.rs            # Terminal wrapper with async event streaming
//!   action.rs         # User actions (commands from key bindings)
//!   ui.rs             # Layout and rendering orchestration
//!   theme.rs          # Color scheme and styling constants
//!   opener.rs         # Opening outbound links in a browser
//!   error.rs          # TUI-specific error types
//!   components/
//!     header.rs       # HeaderBar + IntroBanner
//!     search_box.rs   # Search input with clear button
//!     filter_tabs.rs  # Category tabs
//!     song_list.rs    # SongListView (stateful table)
//!     now_playing.rs  # Now-playing panel
//!     status_bar.rs   # StatusBar
//!     help.rs         # HelpPanel modal overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use bachata_core::{AppState, Catalog, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bachata_tui::TuiError> {
//!     let theme = bachata_tui::Theme::default();
//!     bachata_tui::run(Config::default(), Catalog::builtin(), AppState::new(), theme).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod opener;
pub mod theme;
pub mod tui;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::time::Instant;

use bachata_core::{AppState, Catalog, Config};
use tracing::{info, warn};

pub use action::Action;
pub use app::{App, AppMode, Entrance, RowPhase, SongListState, StatusMessage};
pub use error::TuiError;
pub use event::Event;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI until the user quits.
///
/// 1. Checks that stdout is a terminal and enters it
/// 2. Draws the first frame, then marks the interface as mounted
/// 3. Runs the main event loop
/// 4. Restores the terminal on exit
///
/// # Errors
///
/// Returns [`TuiError::NotATerminal`] when there is no terminal to mount
/// on, and terminal I/O errors raised while drawing.
pub async fn run(
    config: Config,
    catalog: Catalog,
    state: AppState<'static>,
    theme: Theme,
) -> Result<(), TuiError> {
    // tick_rate_ms and frame_rate are small UI timing values, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / config.tui.tick_rate_ms as f64;
    let frame_rate = f64::from(config.tui.frame_rate);

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);
    let mut app = App::new(config, catalog, state);

    tui.enter()?;
    app.set_terminal_size(tui.size());

    info!(songs = app.song_count(), "Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &theme).await;

    tui.exit()?;
    result
}

/// Runs the main event loop.
async fn run_event_loop(tui: &mut Tui, app: &mut App, theme: &Theme) -> Result<(), TuiError> {
    tui.draw(|frame| ui::render(app, frame, theme))?;
    app.mark_mounted(Instant::now());

    loop {
        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Paste(text) => app.handle_paste(&text),
            Event::Resize { width, height } => {
                app.set_terminal_size(ratatui::layout::Rect::new(0, 0, width, height));
                Action::Render
            }
            Event::Tick => {
                app.tick();
                Action::Tick
            }
            Event::Render => Action::Render,
            Event::FocusGained | Event::FocusLost => Action::None,
        };

        let redraw = action.needs_render();
        app.update(action);

        if let Some(url) = app.take_pending_link() {
            if let Err(e) = opener::open_link(&url, app.config.link.browser.as_deref()) {
                warn!(error = %e, "Failed to open link");
                app.status = Some(StatusMessage::error(e.to_string()));
            }
        }

        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }

        if redraw {
            tui.draw(|frame| ui::render(app, frame, theme))?;
        }
    }
}
