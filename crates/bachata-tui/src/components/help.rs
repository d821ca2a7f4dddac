//! Help panel component.
//!
//! Displays a modal overlay with key bindings.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget};

use crate::theme::Theme;

/// Key binding definition for the help panel.
struct KeyBinding {
    /// The key(s) to press.
    key: &'static str,
    /// Description of what the key does.
    description: &'static str,
    /// The mode(s) where this binding applies.
    mode: &'static str,
}

/// Static list of key bindings to display.
const KEY_BINDINGS: &[KeyBinding] = &[
    // Navigation
    KeyBinding {
        key: "j / ↓",
        description: "Next song",
        mode: "Normal",
    },
    KeyBinding {
        key: "k / ↑",
        description: "Previous song",
        mode: "Normal",
    },
    KeyBinding {
        key: "g / G",
        description: "First / last song",
        mode: "Normal",
    },
    KeyBinding {
        key: "PgDn / PgUp",
        description: "Page down / up",
        mode: "Normal",
    },
    // Player
    KeyBinding {
        key: "Enter / click",
        description: "Play song under cursor",
        mode: "Normal",
    },
    KeyBinding {
        key: "o",
        description: "Open YouTube search",
        mode: "Normal",
    },
    KeyBinding {
        key: "x",
        description: "Close player",
        mode: "Normal",
    },
    // Filtering
    KeyBinding {
        key: "Tab / S-Tab",
        description: "Next / previous category",
        mode: "Normal",
    },
    KeyBinding {
        key: "1 - 5",
        description: "Jump to category tab",
        mode: "Normal",
    },
    KeyBinding {
        key: "/",
        description: "Search",
        mode: "Normal",
    },
    KeyBinding {
        key: "Esc / c",
        description: "Clear search",
        mode: "Normal",
    },
    KeyBinding {
        key: "h / title",
        description: "Reset category and search",
        mode: "Normal",
    },
    KeyBinding {
        key: "Ctrl+u",
        description: "Clear search text",
        mode: "Search",
    },
    KeyBinding {
        key: "Enter / Esc",
        description: "Finish typing",
        mode: "Search",
    },
    // Application
    KeyBinding {
        key: "?",
        description: "Toggle help panel",
        mode: "Normal",
    },
    KeyBinding {
        key: "q / Ctrl+c",
        description: "Quit",
        mode: "Any",
    },
];

/// A help panel overlay widget.
///
/// Displays key bindings in a table format as a modal overlay.
pub struct HelpPanel<'a> {
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Builds the table rows from key bindings.
    fn build_rows(&self) -> Vec<Row<'static>> {
        let key_style = self.theme.accent_style().add_modifier(Modifier::BOLD);
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Row::new(vec![
                    Cell::from(Span::styled(binding.key, key_style)),
                    Cell::from(Span::styled(binding.description, self.theme.base_style())),
                    Cell::from(Span::styled(binding.mode, self.theme.dimmed_style())),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        let heading = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(" Help - Key Bindings ", heading));

        let column_style = heading.add_modifier(Modifier::UNDERLINED);
        let header = Row::new(vec![
            Cell::from(Span::styled("Key", column_style)),
            Cell::from(Span::styled("Action", column_style)),
            Cell::from(Span::styled("Mode", column_style)),
        ])
        .height(1)
        .bottom_margin(1);

        let widths = [
            Constraint::Length(15),
            Constraint::Min(25),
            Constraint::Length(8),
        ];

        Table::new(self.build_rows(), widths)
            .block(block)
            .header(header)
            .render(area, buf);
    }
}
