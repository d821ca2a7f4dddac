//! Core types, filter engine, and UI state for the Bachata Database.
//!
//! This crate holds everything that is not presentation:
//!
//! - Domain types ([`Song`], [`Category`], [`CategoryFilter`])
//! - The compiled-in [`Catalog`]
//! - The filter engine ([`filter`], [`filter_indices`], [`FilteredView`])
//! - The selection state machine ([`AppState`], [`Selection`])
//! - Outbound search link construction ([`link`])
//! - Configuration structures and their errors
//!
//! # Example
//!
//! ```
//! use bachata_core::{filter, AppState, Catalog, CategoryFilter};
//!
//! let catalog = Catalog::builtin();
//! let mut state = AppState::new();
//! state.set_search_term("aventura");
//!
//! let songs = filter(catalog.songs(), state.active_category(), state.search_term());
//! assert!(songs.iter().all(|song| song.artist.to_lowercase().contains("aventura")
//!     || song.title.to_lowercase().contains("aventura")));
//! assert_eq!(state.active_category(), CategoryFilter::All);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod link;
pub mod state;
pub mod types;

pub use catalog::Catalog;
pub use config::{Config, LinkConfig, TuiConfig};
pub use error::ConfigError;
pub use filter::{filter, filter_indices, FilteredView, SearchQuery};
pub use state::{AppState, Selection, ViewEffect};
pub use types::{Category, CategoryFilter, ParseCategoryError, Song};
