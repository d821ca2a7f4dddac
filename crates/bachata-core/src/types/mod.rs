//! Domain types for the Bachata Database.
//!
//! - [`category`] - The closed set of song categories and the tab selector
//! - [`song`] - The immutable song record
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use bachata_core::{Category, CategoryFilter, Song};
//! ```

mod category;
mod song;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use song::Song;
