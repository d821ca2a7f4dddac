//! Application state and lifecycle management.
//!
//! This module provides the core [`App`] struct which owns the catalog, the
//! [`AppState`] and all presentation-only state (cursor, mode, animations).
//!
//! # Architecture
//!
//! ```text
//! App
//!  ├── catalog: Catalog          # Immutable song list
//!  ├── state: AppState           # Category, search text, selection
//!  ├── view: FilteredView        # Memoized filter result
//!  ├── mode: AppMode             # Normal / Searching / Help
//!  ├── list_state: SongListState # Cursor and scroll
//!  ├── entrance: Entrance        # Row fade-in timing
//!  └── status: Option<StatusMessage>
//! ```
//!
//! The list cursor and the selection are separate: the cursor only moves,
//! the selection changes when a row is played or the player is closed.

use std::time::{Duration, Instant};

use bachata_core::{AppState, Catalog, CategoryFilter, Config, FilteredView, Song, ViewEffect, link};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::action::Action;
use crate::components::{FilterTabs, NowPlaying, PlayerButton, SearchBox, SongListView};
use crate::ui::{self, UiLayout};

/// Delay added per row before it starts fading in.
pub const ROW_DELAY: Duration = Duration::from_millis(30);

/// Upper bound on the per-row fade-in delay.
pub const MAX_ROW_DELAY: Duration = Duration::from_millis(500);

/// How long a row stays in its fading phase.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// How long a status message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

/// Glyphs cycled by the now-playing disc.
pub const DISC_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode.
    #[default]
    Normal,

    /// Search input mode (typing into the search box).
    Searching,

    /// Help panel is displayed.
    Help,
}

/// Cursor and scroll state for the song list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongListState {
    /// Row under the cursor, if the list is not empty.
    pub cursor: Option<usize>,

    /// Index of the first visible row.
    pub scroll_offset: usize,

    /// Number of rows that fit in the list area.
    pub visible_height: usize,
}

impl SongListState {
    /// Creates a list state with the cursor on the first row of a list of
    /// `len` rows.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cursor: (len > 0).then_some(0),
            ..Self::default()
        }
    }

    /// Moves the cursor to the next row, wrapping to the start.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }

        self.cursor = Some(match self.cursor {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        });

        self.ensure_visible();
    }

    /// Moves the cursor to the previous row, wrapping to the end.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }

        self.cursor = Some(match self.cursor {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });

        self.ensure_visible();
    }

    /// Moves the cursor to the first row.
    pub fn select_first(&mut self, len: usize) {
        self.cursor = (len > 0).then_some(0);
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last row.
    pub fn select_last(&mut self, len: usize) {
        self.cursor = len.checked_sub(1);
        self.ensure_visible();
    }

    /// Moves the cursor down by one page.
    pub fn page_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let page_size = self.visible_height.max(1);
        self.cursor = Some(match self.cursor {
            Some(i) => (i + page_size).min(len - 1),
            None => page_size.min(len - 1),
        });

        self.ensure_visible();
    }

    /// Moves the cursor up by one page.
    pub fn page_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let page_size = self.visible_height.max(1);
        self.cursor = Some(self.cursor.map_or(0, |i| i.saturating_sub(page_size)));

        self.ensure_visible();
    }

    /// Moves the cursor to `index` if it is in range.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.cursor = Some(index);
            self.ensure_visible();
        }
    }

    /// Keeps the cursor inside a list that now has `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = match (self.cursor, len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(1));
        self.ensure_visible();
    }

    /// Puts the cursor and the viewport back on the first row.
    pub fn scroll_to_top(&mut self, len: usize) {
        self.select_first(len);
    }

    /// Adjusts the scroll offset so the cursor row is on screen.
    fn ensure_visible(&mut self) {
        let height = self.visible_height.max(1);
        if let Some(cursor) = self.cursor {
            if cursor < self.scroll_offset {
                self.scroll_offset = cursor;
            } else if cursor >= self.scroll_offset + height {
                self.scroll_offset = cursor + 1 - height;
            }
        }
    }
}

/// Visibility of a list row during the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPhase {
    /// Not drawn yet.
    Hidden,
    /// Drawn with dimmed colors.
    Fading,
    /// Drawn normally.
    Visible,
}

/// Staggered fade-in of list rows after mount.
///
/// Row `i` waits `min(i × 30 ms, 500 ms)` and then fades for 500 ms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entrance {
    enabled: bool,
    started: Option<Instant>,
}

impl Entrance {
    /// Creates an animation that has not started yet.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: None,
        }
    }

    /// Creates an animation that shows every row immediately.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(false)
    }

    /// Starts (or restarts) the animation at `now`.
    pub fn start(&mut self, now: Instant) {
        if self.enabled {
            self.started = Some(now);
        }
    }

    /// Returns the delay before row `index` starts to appear.
    #[must_use]
    pub fn row_delay(index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        ROW_DELAY.saturating_mul(steps).min(MAX_ROW_DELAY)
    }

    /// Returns the phase of row `index` at `now`.
    #[must_use]
    pub fn phase(&self, index: usize, now: Instant) -> RowPhase {
        if !self.enabled {
            return RowPhase::Visible;
        }

        let Some(started) = self.started else {
            return RowPhase::Hidden;
        };

        let elapsed = now.saturating_duration_since(started);
        let delay = Self::row_delay(index);
        if elapsed < delay {
            RowPhase::Hidden
        } else if elapsed < delay + FADE_DURATION {
            RowPhase::Fading
        } else {
            RowPhase::Visible
        }
    }

    /// Returns `true` while some row can still change phase.
    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.enabled
            && self.started.is_some_and(|started| {
                now.saturating_duration_since(started) < MAX_ROW_DELAY + FADE_DURATION
            })
    }
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` once the message has been shown for [`STATUS_TTL`].
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed() >= STATUS_TTL
    }
}

/// The main application state.
pub struct App {
    /// The configuration.
    pub config: Config,

    /// The song catalog.
    catalog: Catalog,

    /// Category, search text and selection.
    pub state: AppState<'static>,

    /// Memoized filter result for the current inputs.
    view: FilteredView,

    /// Current UI mode.
    pub mode: AppMode,

    /// Song list cursor and scroll state.
    pub list_state: SongListState,

    /// Row fade-in animation.
    pub entrance: Entrance,

    /// Current frame of the now-playing disc.
    pub disc_frame: usize,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Link waiting to be opened by the event loop.
    pending_link: Option<String>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size (updated on resize).
    pub terminal_size: Rect,
}

impl App {
    /// Creates a new application over `catalog`, starting from `state`.
    #[must_use]
    pub fn new(config: Config, catalog: Catalog, state: AppState<'static>) -> Self {
        let mut view = FilteredView::new();
        view.refresh(catalog.songs(), state.active_category(), state.search_term());
        let list_state = SongListState::new(view.len());
        let entrance = Entrance::new(config.tui.entrance_animation);

        Self {
            config,
            catalog,
            state,
            view,
            mode: AppMode::Normal,
            list_state,
            entrance,
            disc_frame: 0,
            status: None,
            pending_link: None,
            should_quit: false,
            terminal_size: Rect::default(),
        }
    }

    /// Records the initial mount. Only the first call has any effect.
    pub fn mark_mounted(&mut self, now: Instant) {
        if self.state.mark_loaded() {
            info!(songs = self.view.len(), "Interface mounted");
            self.entrance.start(now);
        }
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Searching => self.handle_search_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    /// Handles a key event in normal mode.
    fn handle_normal_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstItem,
            KeyCode::Char('G') | KeyCode::End => Action::LastItem,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Enter => Action::PlaySelected,
            KeyCode::Char('o') => Action::OpenLink,
            KeyCode::Char('x') => Action::ClosePlayer,
            KeyCode::Tab => Action::NextCategory,
            KeyCode::BackTab => Action::PreviousCategory,
            KeyCode::Char(c @ '1'..='5') => tab_for_digit(c).map_or(Action::None, Action::SetCategory),
            KeyCode::Char('/') => Action::EnterSearchMode,
            KeyCode::Char('h') => Action::Reset,
            KeyCode::Char('c') | KeyCode::Esc if !self.state.search_term().is_empty() => {
                Action::ClearSearch
            }
            _ => Action::None,
        }
    }

    /// Handles a key event in search mode.
    fn handle_search_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::ExitSearchMode,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::ClearSearch
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Action::None,
            KeyCode::Backspace => {
                let mut term = self.state.search_term().to_owned();
                if term.pop().is_some() {
                    Action::SetSearch(term)
                } else {
                    Action::None
                }
            }
            KeyCode::Char(c) => {
                let mut term = self.state.search_term().to_owned();
                term.push(c);
                Action::SetSearch(term)
            }
            _ => Action::None,
        }
    }

    /// Handles a key event in help mode.
    const fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Handles pasted text. Pasting outside of search mode starts a search.
    #[must_use]
    pub fn handle_paste(&mut self, text: &str) -> Action {
        if self.mode == AppMode::Help {
            return Action::None;
        }

        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return Action::None;
        }

        self.mode = AppMode::Searching;
        let mut term = self.state.search_term().to_owned();
        term.push_str(&pasted);
        Action::SetSearch(term)
    }

    /// Handles a mouse event and returns the resulting action.
    #[must_use]
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Action {
        let is_click = matches!(event.kind, MouseEventKind::Down(MouseButton::Left));
        if self.mode == AppMode::Help {
            return if is_click { Action::HideHelp } else { Action::None };
        }

        let layout = self.layout();
        let position = Position::new(event.column, event.row);
        match event.kind {
            MouseEventKind::ScrollDown if layout.list.contains(position) => Action::NextItem,
            MouseEventKind::ScrollUp if layout.list.contains(position) => Action::PreviousItem,
            _ if is_click => self.handle_click(&layout, position),
            _ => Action::None,
        }
    }

    /// Resolves a left click against the current layout.
    fn handle_click(&mut self, layout: &UiLayout, position: Position) -> Action {
        if layout.search.contains(position) {
            if !self.state.search_term().is_empty()
                && SearchBox::clear_button_area(layout.search).contains(position)
            {
                return Action::ClearSearch;
            }
            return Action::EnterSearchMode;
        }

        // Clicking anywhere else takes focus away from the search box
        if self.mode == AppMode::Searching {
            self.mode = AppMode::Normal;
        }

        if layout.title.contains(position) {
            return Action::Reset;
        }

        if let Some(tab) = FilterTabs::tab_at(layout.tabs, position) {
            return Action::SetCategory(tab);
        }

        if let Some(player) = layout.player {
            match NowPlaying::button_at(player, position) {
                Some(PlayerButton::Play) => return Action::OpenLink,
                Some(PlayerButton::Close) => return Action::ClosePlayer,
                None => {}
            }
        }

        if self.view.is_empty() {
            let hint_clicked = !self.state.search_term().is_empty()
                && SongListView::reset_hint_area(layout.list).contains(position);
            return if hint_clicked {
                Action::ClearSearch
            } else {
                Action::None
            };
        }

        SongListView::row_at(layout.list, self.list_state.scroll_offset, position)
            .filter(|&row| row < self.view.len())
            .map_or(Action::None, Action::PlayItem)
    }

    /// Updates the application state based on an action.
    pub fn update(&mut self, action: Action) {
        let len = self.view.len();
        match action {
            Action::Quit => self.should_quit = true,

            Action::NextItem => self.list_state.select_next(len),
            Action::PreviousItem => self.list_state.select_previous(len),
            Action::FirstItem => self.list_state.select_first(len),
            Action::LastItem => self.list_state.select_last(len),
            Action::PageDown => self.list_state.page_down(len),
            Action::PageUp => self.list_state.page_up(len),
            Action::MoveCursor(row) => self.list_state.select(row, len),

            Action::PlaySelected => {
                if let Some(song) = self.cursor_song() {
                    self.play(song);
                }
            }
            Action::PlayItem(row) => {
                self.list_state.select(row, len);
                if let Some(song) = self.song_at(row) {
                    self.play(song);
                }
            }
            Action::ClosePlayer => self.state.clear_selection(),
            Action::OpenLink => self.queue_link(),

            Action::NextCategory => {
                self.state.set_category(self.state.active_category().next());
                self.refresh_view();
            }
            Action::PreviousCategory => {
                self.state.set_category(self.state.active_category().previous());
                self.refresh_view();
            }
            Action::SetCategory(category) => {
                self.state.set_category(category);
                self.refresh_view();
            }
            Action::EnterSearchMode => self.mode = AppMode::Searching,
            Action::ExitSearchMode => self.mode = AppMode::Normal,
            Action::SetSearch(text) => {
                self.state.set_search_term(text);
                self.refresh_view();
            }
            Action::ClearSearch => {
                self.state.clear_search();
                self.refresh_view();
            }
            Action::Reset => {
                let effect = self.state.reset();
                self.refresh_view();
                self.apply_view_effect(effect);
            }

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::ShowHelp => self.mode = AppMode::Help,
            Action::HideHelp => self.mode = AppMode::Normal,

            Action::ShowStatus(text) => self.status = Some(StatusMessage::info(text)),
            Action::ClearStatus => self.status = None,

            Action::Render | Action::Tick | Action::None => {}
        }

        self.sync_viewport();
    }

    /// Handles a tick event (periodic update).
    pub fn tick(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::should_hide) {
            self.status = None;
        }

        if self.state.selection().is_showing() {
            self.disc_frame = (self.disc_frame + 1) % DISC_FRAMES.len();
        }
    }

    /// Returns the link queued by [`Action::OpenLink`], if any.
    pub fn take_pending_link(&mut self) -> Option<String> {
        self.pending_link.take()
    }

    /// Returns the catalog being browsed.
    #[must_use]
    pub const fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Returns the current filter result.
    #[must_use]
    pub const fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Returns the number of songs passing the current filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Returns the total number of songs.
    #[must_use]
    pub const fn song_count(&self) -> usize {
        self.catalog.len()
    }

    /// Returns the songs passing the current filter, in catalog order.
    #[must_use]
    pub fn filtered_songs(&self) -> Vec<&'static Song> {
        self.view
            .indices()
            .iter()
            .filter_map(|&index| self.catalog.get(index))
            .collect()
    }

    /// Returns the song under the list cursor, if any.
    #[must_use]
    pub fn cursor_song(&self) -> Option<&'static Song> {
        self.list_state.cursor.and_then(|row| self.song_at(row))
    }

    /// Returns the current glyph of the now-playing disc.
    #[must_use]
    pub fn disc_glyph(&self) -> &'static str {
        DISC_FRAMES[self.disc_frame % DISC_FRAMES.len()]
    }

    /// Computes the screen layout for the current terminal size.
    #[must_use]
    pub fn layout(&self) -> UiLayout {
        ui::layout(self.terminal_size, self.state.selection().is_showing())
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
        self.sync_viewport();
    }

    fn song_at(&self, row: usize) -> Option<&'static Song> {
        self.view
            .catalog_index(row)
            .and_then(|index| self.catalog.get(index))
    }

    fn play(&mut self, song: &'static Song) {
        self.state.select_song(song);
        self.disc_frame = 0;
    }

    fn queue_link(&mut self) {
        let Some(song) = self.state.selected_song() else {
            self.status = Some(StatusMessage::error("Nothing is playing; press Enter on a song first"));
            return;
        };

        let url = link::search_url(song);
        info!(url = %url, "Opening search link");
        self.status = Some(StatusMessage::info(format!(
            "Opening YouTube: {}",
            link::search_query(song)
        )));
        self.pending_link = Some(url);
    }

    /// Brings the filtered view up to date with the current inputs.
    fn refresh_view(&mut self) {
        let recomputed = self.view.refresh(
            self.catalog.songs(),
            self.state.active_category(),
            self.state.search_term(),
        );

        if recomputed {
            self.list_state.clamp(self.view.len());
            if self.state.is_loaded() {
                self.entrance.start(Instant::now());
            }
        }
    }

    fn apply_view_effect(&mut self, effect: ViewEffect) {
        match effect {
            ViewEffect::ScrollToTop => {
                debug!("Scrolling list to top");
                self.list_state.scroll_to_top(self.view.len());
            }
        }
    }

    /// Recomputes how many rows fit in the list for page navigation.
    fn sync_viewport(&mut self) {
        let layout = self.layout();
        self.list_state.visible_height = SongListView::visible_rows(layout.list);
    }
}

/// Maps the digit keys `1`–`5` to the filter tabs.
fn tab_for_digit(c: char) -> Option<CategoryFilter> {
    let digit = usize::try_from(c.to_digit(10)?).ok()?;
    CategoryFilter::TABS.get(digit.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bachata_core::{Category, Selection};
    use crossterm::event::KeyEventKind;

    fn app() -> App {
        let mut app = App::new(Config::default(), Catalog::builtin(), AppState::new());
        app.set_terminal_size(Rect::new(0, 0, 100, 40));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let action = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.update(action);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) -> Action {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_song_list_state_navigation() {
        let mut state = SongListState::new(0);
        state.visible_height = 10;

        state.select_next(0);
        assert!(state.cursor.is_none());

        state.select_next(5);
        assert_eq!(state.cursor, Some(0));

        state.select_next(5);
        assert_eq!(state.cursor, Some(1));

        state.select_last(5);
        assert_eq!(state.cursor, Some(4));

        state.select_next(5);
        assert_eq!(state.cursor, Some(0)); // Wrap

        state.select_previous(5);
        assert_eq!(state.cursor, Some(4)); // Wrap back

        state.select_first(5);
        assert_eq!(state.cursor, Some(0));
    }

    #[test]
    fn test_song_list_state_paging_scrolls() {
        let mut state = SongListState::new(30);
        state.visible_height = 10;

        state.page_down(30);
        assert_eq!(state.cursor, Some(10));
        assert_eq!(state.scroll_offset, 1);

        state.select_last(30);
        assert_eq!(state.scroll_offset, 20);

        state.page_up(30);
        assert_eq!(state.cursor, Some(19));
        assert_eq!(state.scroll_offset, 19);
    }

    #[test]
    fn test_song_list_state_zero_height() {
        let mut state = SongListState::new(3);
        state.select_last(3);
        assert_eq!(state.cursor, Some(2));
        assert_eq!(state.scroll_offset, 2);
    }

    #[test]
    fn test_song_list_state_clamp() {
        let mut state = SongListState::new(10);
        state.visible_height = 4;
        state.select_last(10);

        state.clamp(3);
        assert_eq!(state.cursor, Some(2));
        assert!(state.scroll_offset <= 2);

        state.clamp(0);
        assert_eq!(state.cursor, None);

        state.clamp(5);
        assert_eq!(state.cursor, Some(0));
    }

    #[test]
    fn test_entrance_row_delay_is_capped() {
        assert_eq!(Entrance::row_delay(0), Duration::ZERO);
        assert_eq!(Entrance::row_delay(3), Duration::from_millis(90));
        assert_eq!(Entrance::row_delay(16), Duration::from_millis(480));
        assert_eq!(Entrance::row_delay(17), MAX_ROW_DELAY);
        assert_eq!(Entrance::row_delay(1_000), MAX_ROW_DELAY);
    }

    #[test]
    fn test_entrance_phases() {
        let start = Instant::now();
        let mut entrance = Entrance::new(true);
        assert_eq!(entrance.phase(0, start), RowPhase::Hidden);

        entrance.start(start);
        assert_eq!(entrance.phase(0, start), RowPhase::Fading);
        assert_eq!(entrance.phase(2, start + Duration::from_millis(30)), RowPhase::Hidden);
        assert_eq!(entrance.phase(2, start + Duration::from_millis(60)), RowPhase::Fading);
        assert_eq!(entrance.phase(2, start + Duration::from_millis(560)), RowPhase::Visible);
        assert!(entrance.is_running(start + Duration::from_millis(999)));
        assert!(!entrance.is_running(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_entrance_disabled_shows_everything() {
        let now = Instant::now();
        let mut entrance = Entrance::disabled();
        assert_eq!(entrance.phase(20, now), RowPhase::Visible);
        entrance.start(now);
        assert!(!entrance.is_running(now));
    }

    #[test]
    fn test_status_message_expiry() {
        let msg = StatusMessage::info("Test message");
        assert!(!msg.is_error);
        assert!(!msg.should_hide());

        let old = StatusMessage {
            timestamp: Instant::now().checked_sub(Duration::from_secs(6)).unwrap(),
            ..StatusMessage::error("Error!")
        };
        assert!(old.is_error);
        assert!(old.should_hide());
    }

    #[test]
    fn test_new_app_shows_full_catalog() {
        let app = app();
        assert_eq!(app.filtered_count(), app.song_count());
        assert_eq!(app.list_state.cursor, Some(0));
        assert_eq!(app.state.selection(), Selection::Idle);
    }

    #[test]
    fn test_new_app_with_preset() {
        let state = AppState::with_preset(CategoryFilter::Only(Category::Remix), "dj");
        let app = App::new(Config::default(), Catalog::builtin(), state);
        assert!(app.filtered_count() > 0);
        assert!(
            app.filtered_songs()
                .iter()
                .all(|song| song.category == Category::Remix)
        );
    }

    #[test]
    fn test_mark_mounted_is_one_shot() {
        let mut app = app();
        let first = Instant::now();
        app.mark_mounted(first);
        assert!(app.state.is_loaded());
        assert_eq!(app.entrance.phase(0, first), RowPhase::Fading);

        // A second mount does not restart the animation
        let later = first + Duration::from_secs(2);
        app.mark_mounted(later);
        assert_eq!(app.entrance.phase(0, later), RowPhase::Visible);
    }

    #[test]
    fn test_enter_selects_cursor_song() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        let expected = &Catalog::builtin().songs()[1];
        assert_eq!(app.state.selected_song(), Some(expected));
    }

    #[test]
    fn test_close_player() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.state.selection().is_showing());

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state.selection(), Selection::Idle);
    }

    #[test]
    fn test_category_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.state.active_category(), CategoryFilter::Only(Category::Remix));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.active_category(), CategoryFilter::Only(Category::Others));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.active_category(), CategoryFilter::All);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state.active_category(), CategoryFilter::Only(Category::Others));

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state.active_category(), CategoryFilter::All);
    }

    #[test]
    fn test_search_mode_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Searching);

        // Keys that are bindings in normal mode are text here
        type_text(&mut app, "romeo");
        assert_eq!(app.state.search_term(), "romeo");
        assert_eq!(app.mode, AppMode::Searching);
        assert!(app.filtered_songs().iter().all(|song| song.artist == "Romeo Santos"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.search_term(), "rome");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.state.search_term(), "rome");
    }

    #[test]
    fn test_search_ctrl_u_clears() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "aventura");

        let action = app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::ClearSearch);
        app.update(action);
        assert_eq!(app.state.search_term(), "");
        assert_eq!(app.mode, AppMode::Searching);
    }

    #[test]
    fn test_esc_clears_search_in_normal_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "2002");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.state.search_term(), "2002");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.search_term(), "");

        // Nothing left to clear
        let action = app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(action, Action::None);
    }

    #[test]
    fn test_empty_result_clears_cursor() {
        let mut app = app();
        app.update(Action::SetSearch("zzz no such song".to_owned()));
        assert_eq!(app.filtered_count(), 0);
        assert_eq!(app.list_state.cursor, None);

        // Playing with an empty list is a no-op
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.selection(), Selection::Idle);
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let playing = app.state.selected_song();

        app.update(Action::SetCategory(CategoryFilter::Only(Category::Remix)));
        app.update(Action::SetSearch("no match at all".to_owned()));
        assert_eq!(app.state.selected_song(), playing);
    }

    #[test]
    fn test_reset_scrolls_to_top() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('G'));
        app.update(Action::SetSearch("a".to_owned()));

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state.active_category(), CategoryFilter::All);
        assert_eq!(app.state.search_term(), "");
        assert_eq!(app.list_state.cursor, Some(0));
        assert_eq!(app.list_state.scroll_offset, 0);
        assert_eq!(app.filtered_count(), app.song_count());
    }

    #[test]
    fn test_open_link_requires_selection() {
        let mut app = app();
        app.update(Action::OpenLink);
        assert!(app.take_pending_link().is_none());
        assert!(app.status.as_ref().is_some_and(|status| status.is_error));

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('o'));
        let song = app.state.selected_song().unwrap();
        assert_eq!(app.take_pending_link(), Some(link::search_url(song)));
        assert!(app.take_pending_link().is_none());
    }

    #[test]
    fn test_paste_starts_search() {
        let mut app = app();
        let action = app.handle_paste("prince\nroyce");
        assert_eq!(app.mode, AppMode::Searching);
        assert_eq!(action, Action::SetSearch("princeroyce".to_owned()));

        assert_eq!(app.handle_paste("\n"), Action::None);
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);

        // Navigation is ignored while help is open
        let action = app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(action, Action::None);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        let action = app.handle_key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert_eq!(action, Action::Quit);
        app.update(action);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_spins_disc_only_while_playing() {
        let mut app = app();
        app.tick();
        assert_eq!(app.disc_frame, 0);

        press(&mut app, KeyCode::Enter);
        app.tick();
        app.tick();
        assert_eq!(app.disc_frame, 2);
        assert_eq!(app.disc_glyph(), DISC_FRAMES[2]);
    }

    #[test]
    fn test_tick_clears_stale_status() {
        let mut app = app();
        app.status = Some(StatusMessage {
            timestamp: Instant::now().checked_sub(Duration::from_secs(10)).unwrap(),
            ..StatusMessage::info("old")
        });
        app.tick();
        assert!(app.status.is_none());
    }

    #[test]
    fn test_click_title_resets() {
        let mut app = app();
        app.update(Action::SetCategory(CategoryFilter::Only(Category::Legend)));
        let title = app.layout().title;
        assert_eq!(click(&mut app, title.x + 1, title.y + 1), Action::Reset);
    }

    #[test]
    fn test_click_song_row_plays_it() {
        let mut app = app();
        let list = app.layout().list;
        // Border, then the column header, then the first row
        let action = click(&mut app, list.x + 3, list.y + 3);
        assert_eq!(action, Action::PlayItem(1));

        app.update(action);
        assert_eq!(app.state.selected_song(), Some(&Catalog::builtin().songs()[1]));
        assert_eq!(app.list_state.cursor, Some(1));
    }

    #[test]
    fn test_click_search_box_enters_search() {
        let mut app = app();
        let search = app.layout().search;
        let action = click(&mut app, search.x + 2, search.y + 1);
        assert_eq!(action, Action::EnterSearchMode);
    }

    #[test]
    fn test_click_outside_search_leaves_search_mode() {
        let mut app = app();
        app.update(Action::EnterSearchMode);
        let status = app.layout().status;
        let _ = click(&mut app, status.x, status.y);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_click_empty_state_reset_clears_search() {
        let mut app = app();
        app.update(Action::SetSearch("no such bachata anywhere".to_owned()));
        assert_eq!(app.filtered_count(), 0);

        let hint = SongListView::reset_hint_area(app.layout().list);
        assert_ne!(hint, Rect::default());

        let action = click(&mut app, hint.x + 1, hint.y);
        assert_eq!(action, Action::ClearSearch);

        app.update(action);
        assert_eq!(app.state.search_term(), "");
        assert_eq!(app.filtered_count(), app.song_count());
    }

    #[test]
    fn test_click_empty_list_away_from_hint_does_nothing() {
        let mut app = app();
        app.update(Action::SetSearch("no such bachata anywhere".to_owned()));

        let list = app.layout().list;
        assert_eq!(click(&mut app, list.x + 2, list.y + 2), Action::None);
        assert_eq!(app.state.search_term(), "no such bachata anywhere");
    }

    #[test]
    fn test_click_in_help_closes_it() {
        let mut app = app();
        app.update(Action::ShowHelp);
        assert_eq!(click(&mut app, 0, 0), Action::HideHelp);
    }

    #[test]
    fn test_player_shrinks_list_viewport() {
        let mut app = app();
        let before = app.list_state.visible_height;
        press(&mut app, KeyCode::Enter);
        assert!(app.list_state.visible_height < before);
    }

    #[test]
    fn test_tab_for_digit() {
        assert_eq!(tab_for_digit('1'), Some(CategoryFilter::All));
        assert_eq!(tab_for_digit('5'), Some(CategoryFilter::Only(Category::Others)));
        assert_eq!(tab_for_digit('0'), None);
        assert_eq!(tab_for_digit('6'), None);
    }
}
