//! Header bar and intro banner.
//!
//! The header shows the application title (clicking it resets the filters)
//! and the number of visible songs. The intro banner below it credits the
//! channels the catalog was collected from.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Channels whose songs make up the catalog.
const CHANNELS: &str = "Cristian, Gabriella, Marco, Sara, Daniel, Desiree, Gero, Miglė";

/// The header bar component.
///
/// Displays:
/// - Application title
/// - Visible / total song count
pub struct HeaderBar<'a> {
    /// Number of songs passing the filter.
    visible: usize,
    /// Number of songs in the catalog.
    total: usize,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(visible: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            visible,
            total,
            theme,
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(" ♫ ", self.theme.accent_style()),
            Span::styled("BACHATA ", self.theme.base_style().add_modifier(Modifier::BOLD)),
            Span::styled("DATABASE", self.theme.header_style),
        ]);

        let count = Line::from(Span::styled(
            format!("   {}/{} songs", self.visible, self.total),
            self.theme.dimmed_style(),
        ));

        Paragraph::new(vec![Line::default(), title, count]).render(area, buf);
    }
}

/// The intro banner shown above the category tabs.
///
/// Rendered dimmed until the interface has mounted, then at full strength.
pub struct IntroBanner<'a> {
    /// Whether the initial mount has happened.
    loaded: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> IntroBanner<'a> {
    /// Creates a new intro banner.
    #[must_use]
    pub const fn new(loaded: bool, theme: &'a Theme) -> Self {
        Self { loaded, theme }
    }
}

impl Widget for &IntroBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (heading, accent, body) = if self.loaded {
            (
                self.theme.base_style().add_modifier(Modifier::BOLD),
                Style::default().fg(self.theme.accent_alt).add_modifier(Modifier::BOLD),
                self.theme.dimmed_style(),
            )
        } else {
            let dimmed = self.theme.dimmed_style();
            (dimmed, dimmed, dimmed)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(" 통합 플레이리스트 ", heading),
                Span::styled("FULL COLLECTION", accent),
            ]),
            Line::from(vec![
                Span::styled(format!(" {CHANNELS}"), accent),
                Span::styled(" 채널의 모든 곡이 포함되었습니다.", body),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}
