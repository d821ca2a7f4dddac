//! Song categories and the category tab selector.
//!
//! [`Category`] is stored on every [`Song`](super::Song). [`CategoryFilter`]
//! adds the synthetic `all` selector that only exists as UI state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The category a song belongs to.
///
/// # Examples
///
/// ```
/// use bachata_core::Category;
///
/// assert_eq!(Category::Legend.as_str(), "legend");
/// assert_eq!("remix".parse::<Category>().ok(), Some(Category::Remix));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The genre's headline acts.
    Legend,
    /// Slow, sensual-style tracks.
    Sensual,
    /// Bachata remixes of songs from other genres.
    Remix,
    /// Everything else, including tracks aimed at advanced dancers.
    Others,
}

impl Category {
    /// Every category, in tab order.
    pub const ALL: [Self; 4] = [Self::Legend, Self::Sensual, Self::Remix, Self::Others];

    /// Returns the lowercase identifier used in data and search text.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legend => "legend",
            Self::Sensual => "sensual",
            Self::Remix => "remix",
            Self::Others => "others",
        }
    }

    /// Returns the tab label shown in the UI.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legend => "3대장 (LEGEND)",
            Self::Sensual => "센슈얼 (SENSUAL)",
            Self::Remix => "리믹스 (REMIX)",
            Self::Others => "기타/전문가용 (OTHERS)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected all, legend, sensual, remix or others)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// The active category tab: either every song or a single category.
///
/// `All` is never stored on a song; it only exists as filter state.
///
/// # Examples
///
/// ```
/// use bachata_core::{Category, CategoryFilter};
///
/// assert!(CategoryFilter::All.matches(Category::Remix));
/// assert!(CategoryFilter::Only(Category::Remix).matches(Category::Remix));
/// assert!(!CategoryFilter::Only(Category::Legend).matches(Category::Remix));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show songs of every category.
    #[default]
    All,
    /// Show only songs of this category.
    Only(Category),
}

impl CategoryFilter {
    /// The filter tabs, in display order.
    pub const TABS: [Self; 5] = [
        Self::All,
        Self::Only(Category::Legend),
        Self::Only(Category::Sensual),
        Self::Only(Category::Remix),
        Self::Only(Category::Others),
    ];

    /// Returns `true` if a song of `category` passes this filter.
    #[inline]
    #[must_use]
    pub const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted as u8 == category as u8,
        }
    }

    /// Returns the lowercase identifier (`all` or the category name).
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    /// Returns the tab label shown in the UI.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Only(category) => category.label(),
        }
    }

    /// Returns the position of this filter in [`Self::TABS`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::All => 0,
            Self::Only(Category::Legend) => 1,
            Self::Only(Category::Sensual) => 2,
            Self::Only(Category::Remix) => 3,
            Self::Only(Category::Others) => 4,
        }
    }

    /// Returns the next tab, wrapping around to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::TABS[(self.position() + 1) % Self::TABS.len()]
    }

    /// Returns the previous tab, wrapping around to the last one.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::TABS[(self.position() + Self::TABS.len() - 1) % Self::TABS.len()]
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
