//! Local UI state and its transitions.
//!
//! [`AppState`] is the single mutable state of the application. It has one
//! writer (the input handlers) and any number of readers (the renderer).
//!
//! # Selection
//!
//! ```text
//!            select_song(s)
//!   Idle ───────────────────► Showing(s)
//!    ▲                          │  ▲
//!    │     clear_selection()    │  │ select_song(t)
//!    └──────────────────────────┘  └── (replaces s)
//! ```
//!
//! Category and search changes never touch the selection.

use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::filter;
use crate::types::{CategoryFilter, Song};

/// The "now selected" song, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<'a> {
    /// Nothing is selected.
    #[default]
    Idle,
    /// A song is selected and shown in the player panel.
    Showing(&'a Song),
}

impl<'a> Selection<'a> {
    /// Returns the selected song, if any.
    #[inline]
    #[must_use]
    pub const fn song(self) -> Option<&'a Song> {
        match self {
            Self::Idle => None,
            Self::Showing(song) => Some(song),
        }
    }

    /// Returns `true` if a song is selected.
    #[inline]
    #[must_use]
    pub const fn is_showing(self) -> bool {
        matches!(self, Self::Showing(_))
    }
}

/// A presentation side effect requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    /// Scroll the song list back to its first row.
    ScrollToTop,
}

/// Category, search text, selection and the one-shot mount flag.
///
/// # Examples
///
/// ```
/// use bachata_core::{AppState, Catalog, Category, CategoryFilter};
///
/// let catalog = Catalog::builtin();
/// let mut state = AppState::new();
///
/// let song = &catalog.songs()[0];
/// state.select_song(song);
/// state.set_category(CategoryFilter::Only(Category::Remix));
///
/// // Filter changes leave the selection alone
/// assert_eq!(state.selected_song(), Some(song));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState<'a> {
    active_category: CategoryFilter,
    search_term: String,
    selection: Selection<'a>,
    loaded: bool,
}

impl<'a> AppState<'a> {
    /// Creates the initial state: all categories, no search, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with a starting category and search text.
    #[must_use]
    pub fn with_preset(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            active_category: category,
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    /// Returns the active category tab.
    #[inline]
    #[must_use]
    pub const fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    /// Returns the raw search text, exactly as typed.
    #[inline]
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the current selection.
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> Selection<'a> {
        self.selection
    }

    /// Returns the selected song, if any.
    #[inline]
    #[must_use]
    pub const fn selected_song(&self) -> Option<&'a Song> {
        self.selection.song()
    }

    /// Returns `true` once the initial mount has happened.
    #[inline]
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Selects a song, replacing any current selection.
    ///
    /// The song does not need to pass the active filter.
    pub fn select_song(&mut self, song: &'a Song) {
        debug!(title = song.title, artist = song.artist, "Song selected");
        self.selection = Selection::Showing(song);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.is_showing() {
            debug!("Selection cleared");
        }
        self.selection = Selection::Idle;
    }

    /// Replaces the active category.
    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(category = %category, "Category changed");
        self.active_category = category;
    }

    /// Replaces the search text verbatim. Normalization happens only when
    /// filtering.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Clears the search text.
    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Resets category and search text together and asks the view to scroll
    /// back to the top. The selection is kept.
    #[must_use = "the view should scroll to the top after a reset"]
    pub fn reset(&mut self) -> ViewEffect {
        debug!("Filters reset");
        self.active_category = CategoryFilter::All;
        self.search_term.clear();
        ViewEffect::ScrollToTop
    }

    /// Marks the initial mount. Returns `true` only the first time.
    pub fn mark_loaded(&mut self) -> bool {
        let first = !self.loaded;
        self.loaded = true;
        first
    }

    /// Runs the filter engine over `catalog` with the current inputs.
    #[must_use]
    pub fn filtered(&self, catalog: &Catalog) -> Vec<&'static Song> {
        filter(catalog.songs(), self.active_category, &self.search_term)
    }
}
