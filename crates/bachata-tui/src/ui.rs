//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function that orchestrates
//! rendering of all UI components, and [`layout`], which the mouse handler
//! shares so clicks land on what was drawn.
//!
//! # Layout Structure
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  ♫ BACHATA DATABASE  | ╭ Search ─────────────────────────╮    |
//! |    12/39 songs       | │ / romeo                        ✕ │    |
//! +---------------------------------------------------------------+
//! | 통합 플레이리스트 FULL COLLECTION                              |
//! | Cristian, Gabriella, ... 채널의 모든 곡이 포함되었습니다.      |
//! |  ALL   3대장 (LEGEND)   센슈얼 (SENSUAL)   ...                 |
//! | ╭ Songs (12) ─────────────────────────────────────────────╮   |
//! | │ #  TITLE                YEAR  ARTIST          CATEGORY   │   |
//! | │ 01 Promise              2011  Romeo Santos    LEGEND     │   |
//! | ╰─────────────────────────────────────────────────────────╯   |
//! | ╭ NOW PLAYING (only while a song is selected) ──────────────╮ |
//! | │ ◐ Promise                            ▶ Play   ✕          │ |
//! | │   Romeo Santos · 2011                                    │ |
//! | ╰──────────────────────────────────────────────────────────╯ |
//! |  BROWSE  / search · Enter play · ? help     PRODUCED BY ...   |
//! +---------------------------------------------------------------+
//! ```

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, AppMode};
use crate::components::{
    FilterTabs, HeaderBar, HelpPanel, IntroBanner, NowPlaying, SearchBox, SongListView, StatusBar,
};
use crate::theme::Theme;

/// Width of the title column in the header.
const TITLE_WIDTH: u16 = 24;

/// Height of the now-playing panel.
const PLAYER_HEIGHT: u16 = 4;

/// Screen areas of every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiLayout {
    /// Application title (click to reset).
    pub title: Rect,
    /// Search box.
    pub search: Rect,
    /// Intro banner.
    pub intro: Rect,
    /// Category tabs.
    pub tabs: Rect,
    /// Song list.
    pub list: Rect,
    /// Now-playing panel, when a song is selected.
    pub player: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Splits `area` into component areas.
#[must_use]
pub fn layout(area: Rect, player_visible: bool) -> UiLayout {
    let player_height = if player_visible { PLAYER_HEIGHT } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(2),             // Intro
            Constraint::Length(1),             // Tabs
            Constraint::Min(3),                // Song list
            Constraint::Length(player_height), // Now playing
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TITLE_WIDTH), Constraint::Min(10)])
        .split(rows[0]);

    UiLayout {
        title: header[0],
        search: header[1],
        intro: rows[1],
        tabs: rows[2],
        list: rows[3],
        player: player_visible.then_some(rows[4]),
        status: rows[5],
    }
}

/// Renders the entire UI based on the current application state.
pub fn render(app: &App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let areas = layout(area, app.state.selection().is_showing());
    let songs = app.catalog().songs();

    let header = HeaderBar::new(app.filtered_count(), app.song_count(), theme);
    frame.render_widget(&header, areas.title);

    let search = SearchBox::new(app.state.search_term(), app.mode == AppMode::Searching, theme);
    frame.render_widget(&search, areas.search);

    let intro = IntroBanner::new(app.state.is_loaded(), theme);
    frame.render_widget(&intro, areas.intro);

    let tabs = FilterTabs::new(app.state.active_category(), theme);
    frame.render_widget(&tabs, areas.tabs);

    let list = SongListView::new(songs, app.view().indices(), &app.entrance, Instant::now(), theme)
        .playing(app.state.selected_song())
        .searching(!app.state.search_term().is_empty());
    frame.render_stateful_widget(&list, areas.list, &mut app.list_state.clone());

    if let (Some(player_area), Some(song)) = (areas.player, app.state.selected_song()) {
        let player = NowPlaying::new(song, app.disc_glyph(), theme);
        frame.render_widget(&player, player_area);
    }

    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, areas.status);

    if app.mode == AppMode::Help {
        let help_panel = HelpPanel::new(theme);
        frame.render_widget(&help_panel, centered_rect(60, 70, area));
    }
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
