//! Now-playing panel.
//!
//! Shown below the list while a song is selected: a spinning disc, the
//! song's title, artist and year, and two buttons. "Play" opens the song's
//! search link, the close button clears the selection.

use bachata_core::Song;
use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Label of the play button.
const PLAY_LABEL: &str = " ▶ Play ";

/// Label of the close button.
const CLOSE_LABEL: &str = " ✕ ";

/// A clickable button on the now-playing panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerButton {
    /// Open the song's search link.
    Play,
    /// Close the panel.
    Close,
}

/// The now-playing panel widget.
pub struct NowPlaying<'a> {
    /// The selected song.
    song: &'a Song,
    /// Current disc animation glyph.
    disc: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> NowPlaying<'a> {
    /// Creates a new now-playing panel.
    #[must_use]
    pub const fn new(song: &'a Song, disc: &'a str, theme: &'a Theme) -> Self {
        Self { song, disc, theme }
    }

    /// Returns the button under `position`, if any.
    #[must_use]
    pub fn button_at(area: Rect, position: Position) -> Option<PlayerButton> {
        let (play, close) = button_areas(area);
        if play.contains(position) {
            Some(PlayerButton::Play)
        } else if close.contains(position) {
            Some(PlayerButton::Close)
        } else {
            None
        }
    }
}

impl Widget for &NowPlaying<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent_alt = Style::default().fg(self.theme.accent_alt);

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(accent_alt)
            .title(Span::styled(" NOW PLAYING ", accent_alt.add_modifier(Modifier::BOLD)))
            .render(area, buf);

        let inner = area.inner(Margin::new(1, 1));
        let (play, close) = button_areas(area);

        // Text stops one column before the buttons
        let text_width = play.x.saturating_sub(inner.x).saturating_sub(1);
        let text_area = Rect::new(inner.x, inner.y, text_width, inner.height);

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.disc), self.theme.accent_style()),
                Span::styled(self.song.title, self.theme.base_style().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled(format!("   {}", self.song.artist), self.theme.dimmed_style()),
                Span::styled(" · ", self.theme.dimmed_style()),
                Span::styled(self.song.year.to_string(), self.theme.accent_style()),
            ]),
        ];
        Paragraph::new(lines).render(text_area, buf);

        buf.set_stringn(
            play.x,
            play.y,
            PLAY_LABEL,
            usize::from(play.width),
            self.theme.active_tab_style,
        );
        buf.set_stringn(
            close.x,
            close.y,
            CLOSE_LABEL,
            usize::from(close.width),
            self.theme.dimmed_style().add_modifier(Modifier::BOLD),
        );
    }
}

/// Places the play and close buttons at the right end of the first inner row.
fn button_areas(area: Rect) -> (Rect, Rect) {
    let inner = area.inner(Margin::new(1, 1));
    if inner.height == 0 {
        return (Rect::default(), Rect::default());
    }

    let play_width = u16::try_from(PLAY_LABEL.width()).unwrap_or(u16::MAX);
    let close_width = u16::try_from(CLOSE_LABEL.width()).unwrap_or(u16::MAX);

    let close_x = inner.right().saturating_sub(close_width + 1).max(inner.x);
    let close = Rect::new(close_x, inner.y, close_width, 1).intersection(inner);

    let play_x = close_x.saturating_sub(play_width + 1).max(inner.x);
    let play = Rect::new(play_x, inner.y, play_width, 1).intersection(inner);

    (play, close)
}
