//! Song list component.
//!
//! Displays the filtered songs as a scrollable table with a cursor, or an
//! empty-state message when nothing matches.

use std::time::Instant;

use bachata_core::Song;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Margin, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table,
    TableState, Widget,
};

use unicode_width::UnicodeWidthStr;

use crate::app::{Entrance, RowPhase, SongListState};
use crate::theme::Theme;

/// Rows taken by the border and the column header above the first song.
const ROWS_ABOVE: u16 = 2;

/// Key part of the empty-state reset hint.
const RESET_HINT_KEY: &str = "[Esc]";

/// Label part of the empty-state reset hint.
const RESET_HINT_LABEL: &str = " 검색어 초기화";

/// Lines in the empty-state message when the reset hint is shown.
const EMPTY_STATE_LINES: u16 = 4;

/// Line of the reset hint within the empty-state message.
const RESET_HINT_LINE: u16 = 3;

/// A stateful song list widget.
///
/// Uses [`StatefulWidget`] with [`SongListState`] for cursor and scroll.
pub struct SongListView<'a> {
    /// Every song in the catalog.
    songs: &'a [Song],
    /// Catalog positions of the visible songs, in display order.
    indices: &'a [usize],
    /// The song in the player, if any.
    playing: Option<&'a Song>,
    /// Whether a search term is active (enables the reset hint).
    searching: bool,
    /// Row fade-in timing.
    entrance: &'a Entrance,
    /// Time used to evaluate the entrance animation.
    now: Instant,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> SongListView<'a> {
    /// Creates a new song list view.
    #[must_use]
    pub const fn new(
        songs: &'a [Song],
        indices: &'a [usize],
        entrance: &'a Entrance,
        now: Instant,
        theme: &'a Theme,
    ) -> Self {
        Self {
            songs,
            indices,
            playing: None,
            searching: false,
            entrance,
            now,
            theme,
        }
    }

    /// Marks the song currently in the player.
    #[must_use]
    pub const fn playing(mut self, song: Option<&'a Song>) -> Self {
        self.playing = song;
        self
    }

    /// Enables the search reset hint in the empty state.
    #[must_use]
    pub const fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    /// Returns how many song rows fit in `area`.
    #[must_use]
    pub fn visible_rows(area: Rect) -> usize {
        usize::from(area.height.saturating_sub(ROWS_ABOVE + 1))
    }

    /// Returns the list row (offset by `scroll_offset`) under `position`.
    ///
    /// The caller checks the result against the list length.
    #[must_use]
    pub fn row_at(area: Rect, scroll_offset: usize, position: Position) -> Option<usize> {
        let rows = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(ROWS_ABOVE),
            area.width.saturating_sub(2),
            area.height.saturating_sub(ROWS_ABOVE + 1),
        );
        rows.contains(position)
            .then(|| scroll_offset + usize::from(position.y - rows.y))
    }

    /// Returns the screen area of the empty-state reset hint for a list
    /// drawn in `area`.
    ///
    /// Only meaningful while the list is empty and a search term is set.
    #[must_use]
    pub fn reset_hint_area(area: Rect) -> Rect {
        let inner = area.inner(Margin::new(1, 1));
        let y = empty_state_top(inner) + RESET_HINT_LINE;
        if y >= inner.bottom() {
            return Rect::default();
        }

        let hint_width = u16::try_from(RESET_HINT_KEY.width() + RESET_HINT_LABEL.width())
            .unwrap_or(u16::MAX)
            .min(inner.width);
        // Same centering as `Alignment::Center` in `Paragraph`
        let x = inner.x + (inner.width / 2).saturating_sub(hint_width / 2);
        Rect::new(x, y, hint_width, 1)
    }

    /// Builds the table row for the song at display position `row`.
    fn build_row(&self, row: usize, song: &'a Song) -> Row<'a> {
        let phase = self.entrance.phase(row, self.now);
        if phase == RowPhase::Hidden {
            return Row::default();
        }

        let is_playing = self.playing == Some(song);
        let (number_style, title_style, detail_style, category_style) = match phase {
            RowPhase::Fading => {
                let dimmed = self.theme.dimmed_style();
                (dimmed, dimmed, dimmed, dimmed)
            }
            _ => (
                self.theme.dimmed_style(),
                if is_playing {
                    self.theme.accent_style().add_modifier(Modifier::BOLD)
                } else {
                    self.theme.base_style()
                },
                self.theme.dimmed_style(),
                self.theme.category_style(song.category),
            ),
        };

        let number = if is_playing {
            " ♪".to_owned()
        } else {
            format!("{:02}", row + 1)
        };

        Row::new(vec![
            Cell::from(Span::styled(number, number_style)),
            Cell::from(Span::styled(song.title, title_style)),
            Cell::from(Span::styled(song.year.to_string(), detail_style)),
            Cell::from(Span::styled(song.artist, detail_style)),
            Cell::from(Span::styled(song.category.as_str().to_uppercase(), category_style)),
        ])
    }

    /// Renders the "no results" message inside the list block.
    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "검색 결과가 없습니다.",
                self.theme.base_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("다른 검색어로 시도해보세요.", self.theme.dimmed_style())),
        ];
        if self.searching {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(
                    RESET_HINT_KEY,
                    self.theme.accent_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(RESET_HINT_LABEL, self.theme.accent_style()),
            ]));
        }

        let top = empty_state_top(inner);
        let area = Rect::new(inner.x, top, inner.width, inner.bottom() - top);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Returns the first row of the vertically centered empty-state message.
fn empty_state_top(inner: Rect) -> u16 {
    inner.y + inner.height.saturating_sub(EMPTY_STATE_LINES) / 2
}

impl StatefulWidget for &SongListView<'_> {
    type State = SongListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style)
            .title(Span::styled(
                format!(" Songs ({}) ", self.indices.len()),
                self.theme.header_style,
            ));

        if self.indices.is_empty() {
            let inner = area.inner(Margin::new(1, 1));
            block.render(area, buf);
            self.render_empty(inner, buf);
            return;
        }

        let header_style = self.theme.accent_style().add_modifier(Modifier::BOLD);
        let header = Row::new(["#", "TITLE", "YEAR", "ARTIST", "CATEGORY"].map(|label| {
            Cell::from(Span::styled(label, header_style))
        }));

        let rows: Vec<Row<'_>> = self
            .indices
            .iter()
            .enumerate()
            .filter_map(|(row, &index)| self.songs.get(index).map(|song| self.build_row(row, song)))
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(5),
            Constraint::Length(20),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .block(block)
            .header(header)
            .row_highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        let mut table_state = TableState::default();
        table_state.select(state.cursor);
        *table_state.offset_mut() = state.scroll_offset;

        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bachata_core::Category;

    use crate::test_support::{buffer_text, row_text};

    static SONGS: &[Song] = &[
        Song::new("Obsesión", "Aventura", Category::Legend, 2002),
        Song::new("Darte un Beso", "Prince Royce", Category::Others, 2013),
    ];

    fn render(view: &SongListView<'_>, state: &mut SongListState) -> Buffer {
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let theme = Theme::dark();
        let entrance = Entrance::disabled();
        let view = SongListView::new(SONGS, &[0, 1], &entrance, Instant::now(), &theme);

        let buf = render(&view, &mut SongListState::new(2));

        assert!(row_text(&buf, 0).contains("Songs (2)"));
        assert!(row_text(&buf, 1).contains("TITLE"));
        let first = row_text(&buf, 2);
        assert!(first.contains("▸ 01"));
        assert!(first.contains("Obsesión"));
        assert!(first.contains("2002"));
        assert!(first.contains("Aventura"));
        assert!(first.contains("LEGEND"));
        assert!(row_text(&buf, 3).contains("02"));
    }

    #[test]
    fn test_display_numbers_follow_filtered_order() {
        let theme = Theme::dark();
        let entrance = Entrance::disabled();
        let view = SongListView::new(SONGS, &[1], &entrance, Instant::now(), &theme);

        let buf = render(&view, &mut SongListState::new(1));

        let first = row_text(&buf, 2);
        assert!(first.contains("01"));
        assert!(first.contains("Darte un Beso"));
    }

    #[test]
    fn test_playing_song_is_marked() {
        let theme = Theme::dark();
        let entrance = Entrance::disabled();
        let view = SongListView::new(SONGS, &[0, 1], &entrance, Instant::now(), &theme)
            .playing(Some(&SONGS[1]));

        let buf = render(&view, &mut SongListState::new(2));

        assert!(row_text(&buf, 3).contains("♪"));
        assert!(!row_text(&buf, 2).contains("♪"));
    }

    #[test]
    fn test_hidden_rows_before_mount() {
        let theme = Theme::dark();
        let entrance = Entrance::new(true);
        let view = SongListView::new(SONGS, &[0, 1], &entrance, Instant::now(), &theme);

        let buf = render(&view, &mut SongListState::new(2));

        assert!(!buffer_text(&buf).contains("Obsesión"));
    }

    #[test]
    fn test_empty_state_with_search_hint() {
        let theme = Theme::dark();
        let entrance = Entrance::disabled();
        let view = SongListView::new(SONGS, &[], &entrance, Instant::now(), &theme).searching(true);

        let buf = render(&view, &mut SongListState::new(0));

        let text = buffer_text(&buf);
        assert!(text.contains("검색 결과가 없습니다."));
        assert!(text.contains("[Esc] 검색어 초기화"));
    }

    #[test]
    fn test_empty_state_without_search_has_no_hint() {
        let theme = Theme::dark();
        let entrance = Entrance::disabled();
        let view = SongListView::new(SONGS, &[], &entrance, Instant::now(), &theme);

        let buf = render(&view, &mut SongListState::new(0));

        let text = buffer_text(&buf);
        assert!(text.contains("검색 결과가 없습니다."));
        assert!(!text.contains("[Esc]"));
    }

    #[test]
    fn test_reset_hint_area_covers_rendered_hint() {
        let theme = Theme::dark();
        let entrance = Entrance::disabled();
        let view = SongListView::new(SONGS, &[], &entrance, Instant::now(), &theme).searching(true);

        let buf = render(&view, &mut SongListState::new(0));
        let hint = SongListView::reset_hint_area(Rect::new(0, 0, 80, 10));

        assert_eq!(hint.height, 1);
        assert_eq!(buf[(hint.x, hint.y)].symbol(), "[");
        assert_eq!(buf[(hint.x + 4, hint.y)].symbol(), "]");
        assert!(row_text(&buf, hint.y).contains("[Esc] 검색어 초기화"));
    }

    #[test]
    fn test_reset_hint_area_empty_when_list_too_short() {
        assert_eq!(SongListView::reset_hint_area(Rect::new(0, 0, 80, 4)), Rect::default());
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(SongListView::visible_rows(Rect::new(0, 0, 80, 10)), 7);
        assert_eq!(SongListView::visible_rows(Rect::new(0, 0, 80, 2)), 0);
    }

    #[test]
    fn test_row_at() {
        let area = Rect::new(0, 5, 80, 10);
        assert_eq!(SongListView::row_at(area, 0, Position::new(4, 5)), None); // border
        assert_eq!(SongListView::row_at(area, 0, Position::new(4, 6)), None); // header
        assert_eq!(SongListView::row_at(area, 0, Position::new(4, 7)), Some(0));
        assert_eq!(SongListView::row_at(area, 3, Position::new(4, 8)), Some(4));
        assert_eq!(SongListView::row_at(area, 0, Position::new(4, 14)), None); // bottom border
        assert_eq!(SongListView::row_at(area, 0, Position::new(0, 7)), None); // left border
    }
}
