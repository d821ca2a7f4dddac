//! Category filter tabs.
//!
//! One row of tabs, `ALL` first, followed by each category. Labels contain
//! Hangul, so positions are measured in display columns rather than bytes.

use bachata_core::CategoryFilter;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Columns between two tabs.
const GAP: u16 = 1;

/// The filter tab bar.
pub struct FilterTabs<'a> {
    /// The active tab.
    active: CategoryFilter,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> FilterTabs<'a> {
    /// Creates a new tab bar.
    #[must_use]
    pub const fn new(active: CategoryFilter, theme: &'a Theme) -> Self {
        Self { active, theme }
    }

    /// Returns the tab under `position`, if any.
    #[must_use]
    pub fn tab_at(area: Rect, position: Position) -> Option<CategoryFilter> {
        tab_areas(area)
            .find(|(_, tab_area)| tab_area.contains(position))
            .map(|(tab, _)| tab)
    }
}

impl Widget for &FilterTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (tab, tab_area) in tab_areas(area) {
            let style = if tab == self.active {
                self.theme.active_tab_style
            } else {
                self.theme.dimmed_style()
            };
            buf.set_stringn(
                tab_area.x,
                tab_area.y,
                format!(" {} ", tab.label()),
                usize::from(tab_area.width),
                style,
            );
        }
    }
}

/// Lays the tabs out left to right, clipped to `area`.
fn tab_areas(area: Rect) -> impl Iterator<Item = (CategoryFilter, Rect)> {
    let mut x = area.x;
    CategoryFilter::TABS.into_iter().filter_map(move |tab| {
        let label_width = u16::try_from(tab.label().width() + 2).unwrap_or(u16::MAX);
        let start = x;
        x = x.saturating_add(label_width).saturating_add(GAP);

        if area.height == 0 || start >= area.right() {
            return None;
        }
        let width = label_width.min(area.right() - start);
        Some((tab, Rect::new(start, area.y, width, 1)))
    })
}
