//! The filter engine.
//!
//! Maps `(songs, category, search text)` to the ordered subsequence of songs
//! that pass both the category filter and the search query. The engine is
//! pure: the same inputs always produce the same output, so callers can
//! memoize the result with [`FilteredView`].
//!
//! # Matching rules
//!
//! The search text is lowercased, trimmed, and split on runs of whitespace
//! (U+FEFF included) into tokens. A song matches when **every** token is a substring of
//! `lowercase(title + " " + artist + " " + year + " " + category)`. Tokens
//! may match inside words, and a numeric token matches anywhere its digits
//! appear. Whitespace-only input is the same as no search text.
//!
//! ```
//! use bachata_core::{filter, Category, CategoryFilter, Song};
//!
//! static SONGS: &[Song] = &[
//!     Song::new("Obsesión", "Aventura", Category::Legend, 2002),
//!     Song::new("Darte un Beso", "Prince Royce", Category::Others, 2013),
//! ];
//!
//! let hits = filter(SONGS, CategoryFilter::All, "prince royce");
//! assert_eq!(hits, vec![&SONGS[1]]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::types::{CategoryFilter, Song};

/// A normalized search query: the lowercase whitespace-separated tokens of
/// the raw search text.
///
/// # Examples
///
/// ```
/// use bachata_core::SearchQuery;
///
/// let query = SearchQuery::parse("  Romeo   SANTOS ");
/// assert_eq!(query.tokens().collect::<Vec<_>>(), vec!["romeo", "santos"]);
/// assert!(SearchQuery::parse(" \t ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    tokens: SmallVec<[String; 4]>,
}

impl SearchQuery {
    /// Normalizes raw search text into tokens.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim_matches(is_separator).to_lowercase();
        Self {
            tokens: normalized
                .split(is_separator)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Returns `true` if the query has no tokens (empty or whitespace-only input).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens, duplicates included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the tokens in input order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns `true` if every token occurs in `haystack`.
    ///
    /// `haystack` must already be lowercase.
    #[must_use]
    pub fn matches_text(&self, haystack: &str) -> bool {
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }

    /// Returns `true` if the song's search text contains every token.
    #[must_use]
    pub fn matches(&self, song: &Song) -> bool {
        self.is_empty() || self.matches_text(&song.search_text())
    }
}

/// Characters that separate search tokens: Unicode whitespace plus the
/// zero-width no-break space (U+FEFF), which pasted text often starts with.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Returns the catalog positions of the songs that pass the filter, in order.
#[must_use]
pub fn filter_indices(songs: &[Song], category: CategoryFilter, search_term: &str) -> Vec<usize> {
    let query = SearchQuery::parse(search_term);
    query_indices(songs, category, &query)
}

/// Returns the songs that pass the category filter and search text, in
/// catalog order.
#[must_use]
pub fn filter<'a>(songs: &'a [Song], category: CategoryFilter, search_term: &str) -> Vec<&'a Song> {
    filter_indices(songs, category, search_term)
        .into_iter()
        .filter_map(|index| songs.get(index))
        .collect()
}

fn query_indices(songs: &[Song], category: CategoryFilter, query: &SearchQuery) -> Vec<usize> {
    let in_category = songs
        .iter()
        .enumerate()
        .filter(|(_, song)| category.matches(song.category));

    if query.is_empty() {
        return in_category.map(|(index, _)| index).collect();
    }

    in_category
        .filter(|(_, song)| query.matches_text(&song.search_text()))
        .map(|(index, _)| index)
        .collect()
}

/// A memoized filter result.
///
/// Holds the indices produced for the last `(category, query)` pair and only
/// recomputes when one of them changes. Because the search text is
/// normalized first, edits that do not change the tokens (such as a trailing
/// space) reuse the cached result.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    key: Option<(CategoryFilter, SearchQuery)>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// Creates an empty view that will compute on first refresh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the view up to date with the given inputs.
    ///
    /// Returns `true` if the result was recomputed.
    pub fn refresh(&mut self, songs: &[Song], category: CategoryFilter, search_term: &str) -> bool {
        let query = SearchQuery::parse(search_term);
        if self
            .key
            .as_ref()
            .is_some_and(|(cached_category, cached_query)| {
                *cached_category == category && *cached_query == query
            })
        {
            return false;
        }

        self.indices = query_indices(songs, category, &query);
        trace!(
            category = %category,
            tokens = query.len(),
            matches = self.indices.len(),
            "Recomputed filtered view"
        );
        self.key = Some((category, query));
        true
    }

    /// Returns the catalog positions of the visible songs.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of visible songs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no song is visible.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the catalog position shown at `row`, if any.
    #[must_use]
    pub fn catalog_index(&self, row: usize) -> Option<usize> {
        self.indices.get(row).copied()
    }

    /// Resolves the visible songs against `songs`.
    pub fn songs<'a>(&'a self, songs: &'a [Song]) -> impl Iterator<Item = &'a Song> + 'a {
        self.indices.iter().filter_map(move |&index| songs.get(index))
    }
}
