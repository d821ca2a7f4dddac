//! Search box component.
//!
//! A single-line input in the header. Shows a placeholder when empty, a
//! cursor while search mode is active, and a clear button once text has
//! been entered.

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Text shown while the search box is empty.
const PLACEHOLDER: &str = "곡명, 아티스트 또는 연도 검색...";

/// Glyph of the clear button.
const CLEAR_GLYPH: &str = "✕";

/// Leading prompt inside the box.
const PROMPT: &str = "/ ";

/// The search box widget.
pub struct SearchBox<'a> {
    /// The current search text.
    term: &'a str,
    /// Whether search mode is active.
    active: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> SearchBox<'a> {
    /// Creates a new search box.
    #[must_use]
    pub const fn new(term: &'a str, active: bool, theme: &'a Theme) -> Self {
        Self {
            term,
            active,
            theme,
        }
    }

    /// Returns the cell occupied by the clear button inside `area`.
    ///
    /// The button is only drawn (and only clickable) while the search text
    /// is not empty.
    #[must_use]
    pub fn clear_button_area(area: Rect) -> Rect {
        if area.width < 5 || area.height < 3 {
            return Rect::default();
        }
        Rect::new(area.right() - 3, area.y + 1, 1, 1)
    }
}

impl Widget for &SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.active {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };

        let title = if self.active {
            " Search · Enter/Esc to finish "
        } else {
            " Search "
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(title, self.theme.dimmed_style()))
            .render(area, buf);

        let inner = area.inner(Margin::new(1, 1));
        // Leave room for the clear button and a space before it
        let available = usize::from(inner.width).saturating_sub(PROMPT.width() + 3);

        let mut spans = vec![Span::styled(PROMPT, self.theme.accent_style())];
        if self.term.is_empty() && !self.active {
            spans.push(Span::styled(
                PLACEHOLDER,
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(tail_fit(self.term, available), self.theme.base_style()));
            if self.active {
                spans.push(Span::styled("▌", self.theme.accent_style()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);

        if !self.term.is_empty() {
            let button = SearchBox::clear_button_area(area);
            buf.set_string(button.x, button.y, CLEAR_GLYPH, self.theme.dimmed_style());
        }
    }
}

/// Returns the longest suffix of `text` that fits in `width` columns, so the
/// end of a long search stays visible while typing.
fn tail_fit(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = index;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::row_text;

    fn render(term: &str, active: bool) -> Buffer {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        (&SearchBox::new(term, active, &theme)).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_placeholder_when_empty() {
        let buf = render("", false);
        assert!(row_text(&buf, 1).contains(PLACEHOLDER));
        assert!(!row_text(&buf, 1).contains(CLEAR_GLYPH));
    }

    #[test]
    fn test_active_shows_cursor_instead_of_placeholder() {
        let buf = render("", true);
        let line = row_text(&buf, 1);
        assert!(line.contains("/ ▌"));
        assert!(!line.contains(PLACEHOLDER));
    }

    #[test]
    fn test_clear_button_shown_with_text() {
        let buf = render("aventura", false);
        let button = SearchBox::clear_button_area(Rect::new(0, 0, 50, 3));
        assert_eq!(buf[(button.x, button.y)].symbol(), CLEAR_GLYPH);
        assert!(row_text(&buf, 1).contains("/ aventura"));
    }

    #[test]
    fn test_clear_button_area_needs_room() {
        assert_eq!(SearchBox::clear_button_area(Rect::new(0, 0, 4, 3)), Rect::default());
        assert_eq!(SearchBox::clear_button_area(Rect::new(10, 0, 20, 3)), Rect::new(27, 1, 1, 1));
    }

    #[test]
    fn test_tail_fit() {
        assert_eq!(tail_fit("romeo santos", 20), "romeo santos");
        assert_eq!(tail_fit("romeo santos", 6), "santos");
        assert_eq!(tail_fit("propuesta", 0), "");
        // Wide characters take two columns
        assert_eq!(tail_fit("검색어", 4), "색어");
    }
}
