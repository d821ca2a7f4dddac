//! UI components for the TUI.
//!
//! This module contains all the widget implementations for rendering
//! different parts of the interface.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` for `&T`): `HeaderBar`, `IntroBanner`, `SearchBox`,
//!   `FilterTabs`, `NowPlaying`, `StatusBar`
//! - **Stateful Widgets** (`StatefulWidget`): `SongListView`
//! - **Overlays**: `HelpPanel`
//!
//! Components that react to clicks also expose their hit-testing
//! (`FilterTabs::tab_at`, `SongListView::row_at`, `NowPlaying::button_at`,
//! `SearchBox::clear_button_area`) so the mouse handler and the renderer
//! agree on geometry.

mod filter_tabs;
mod header;
mod help;
mod now_playing;
mod search_box;
mod song_list;
mod status_bar;

pub use filter_tabs::FilterTabs;
pub use header::{HeaderBar, IntroBanner};
pub use help::HelpPanel;
pub use now_playing::{NowPlaying, PlayerButton};
pub use search_box::SearchBox;
pub use song_list::SongListView;
pub use status_bar::StatusBar;
