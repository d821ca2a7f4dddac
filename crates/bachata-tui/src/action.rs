//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing every user-initiated
//! command. Input events (key presses, mouse clicks, pastes) are translated
//! into actions, and actions are the only way application state changes.
//!
//! # Action Flow
//!
//! ```text
//! Key/Mouse Event → App::handle_* → Action → App::update → AppState
//! ```

use bachata_core::CategoryFilter;

/// User-initiated actions in the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Cursor Navigation
    // =========================================================================
    /// Move the list cursor to the next row.
    NextItem,

    /// Move the list cursor to the previous row.
    PreviousItem,

    /// Move the list cursor to the first row.
    FirstItem,

    /// Move the list cursor to the last row.
    LastItem,

    /// Move the list cursor down by one page.
    PageDown,

    /// Move the list cursor up by one page.
    PageUp,

    /// Move the list cursor to a specific row.
    MoveCursor(usize),

    // =========================================================================
    // Selection
    // =========================================================================
    /// Select the song under the cursor.
    PlaySelected,

    /// Move the cursor to a row and select its song.
    PlayItem(usize),

    /// Clear the selection and hide the player panel.
    ClosePlayer,

    /// Open the outbound search link of the selected song.
    OpenLink,

    // =========================================================================
    // Filtering
    // =========================================================================
    /// Switch to the next category tab.
    NextCategory,

    /// Switch to the previous category tab.
    PreviousCategory,

    /// Switch to a specific category tab.
    SetCategory(CategoryFilter),

    /// Enter search mode (start typing).
    EnterSearchMode,

    /// Leave search mode, keeping the search text.
    ExitSearchMode,

    /// Replace the search text.
    SetSearch(String),

    /// Clear the search text.
    ClearSearch,

    /// Reset category and search together and scroll to the top.
    Reset,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Show the help panel.
    ShowHelp,

    /// Hide the help panel.
    HideHelp,

    /// Show a status message.
    ShowStatus(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// Tick (periodic update).
    Tick,

    /// No operation.
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None | Self::Tick)
    }

    /// Returns `true` if this action only moves the list cursor.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextItem
                | Self::PreviousItem
                | Self::FirstItem
                | Self::LastItem
                | Self::PageDown
                | Self::PageUp
                | Self::MoveCursor(_)
        )
    }

    /// Returns `true` if this action changes the selected song.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::PlaySelected | Self::PlayItem(_) | Self::ClosePlayer
        )
    }

    /// Returns `true` if this is a filter-related action.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::EnterSearchMode | Self::ExitSearchMode
        ) || self.modifies_filter()
    }

    /// Returns `true` if this action changes the filter inputs, so the
    /// filtered list has to be brought up to date.
    #[must_use]
    pub const fn modifies_filter(&self) -> bool {
        matches!(
            self,
            Self::NextCategory
                | Self::PreviousCategory
                | Self::SetCategory(_)
                | Self::SetSearch(_)
                | Self::ClearSearch
                | Self::Reset
        )
    }
}
