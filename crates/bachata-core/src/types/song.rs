//! The immutable song record.

use serde::Serialize;

use super::category::Category;

/// A song in the catalog.
///
/// Songs have no identity field. The list position is only used for display
/// numbering, never for lookup.
///
/// # Examples
///
/// ```
/// use bachata_core::{Category, Song};
///
/// const SONG: Song = Song::new("Obsesión", "Aventura", Category::Legend, 2002);
/// assert_eq!(SONG.search_text(), "obsesión aventura 2002 legend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Song {
    /// Song title.
    pub title: &'static str,
    /// Performing artist.
    pub artist: &'static str,
    /// Catalog category.
    pub category: Category,
    /// Release year.
    pub year: u16,
}

impl Song {
    /// Creates a song record.
    #[must_use]
    pub const fn new(
        title: &'static str,
        artist: &'static str,
        category: Category,
        year: u16,
    ) -> Self {
        Self {
            title,
            artist,
            category,
            year,
        }
    }

    /// Returns the lowercase text searched by the filter engine:
    /// title, artist, year and category joined by single spaces.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.artist, self.year, self.category
        )
        .to_lowercase()
    }
}
