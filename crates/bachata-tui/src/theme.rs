//! Theme and styling for the TUI.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface: the dark palette, and a monochrome
//! fallback for terminals where color is turned off.
//!
//! # Example
//!
//! ```
//! use bachata_core::Category;
//! use bachata_tui::Theme;
//!
//! let theme = Theme::dark();
//! let style = theme.category_style(Category::Remix);
//! ```

use bachata_core::Category;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// [`Theme::dark()`] is the default; [`Theme::monochrome()`] drops every
/// color and relies on text modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Category Colors
    // =========================================================================
    /// Foreground color for legend songs.
    pub legend_fg: Color,

    /// Foreground color for sensual songs.
    pub sensual_fg: Color,

    /// Foreground color for remixes.
    pub remix_fg: Color,

    /// Foreground color for everything else.
    pub others_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Primary background color.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for the title, active tab and buttons.
    pub accent: Color,

    /// Secondary accent used for the now-playing panel.
    pub accent_alt: Color,

    /// Error/warning color.
    pub error_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for focused borders.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for the row under the cursor.
    pub highlight_style: Style,

    /// Style for the header title.
    pub header_style: Style,

    /// Style for the active filter tab.
    pub active_tab_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    ///
    /// This is the default theme, optimized for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            legend_fg: Color::Rgb(255, 196, 87),   // Gold
            sensual_fg: Color::Rgb(255, 121, 198), // Pink
            remix_fg: Color::Rgb(139, 233, 253),   // Cyan
            others_fg: Color::Rgb(170, 170, 190),

            fg: Color::Rgb(225, 220, 235),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(120, 115, 135),
            accent: Color::Rgb(236, 72, 153),      // Pink 500
            accent_alt: Color::Rgb(168, 85, 247),  // Purple 500
            error_fg: Color::Rgb(255, 85, 85),

            border_style: Style::default().fg(Color::Rgb(70, 60, 90)),
            focused_border_style: Style::default().fg(Color::Rgb(236, 72, 153)),

            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 40, 75))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(236, 72, 153))
                .add_modifier(Modifier::BOLD),
            active_tab_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(236, 72, 153))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 175, 195))
                .bg(Color::Rgb(35, 30, 45)),
        }
    }

    /// Creates a theme that uses no colors, only text modifiers.
    ///
    /// Used when `--no-color` is passed or `NO_COLOR` is set.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            legend_fg: Color::Reset,
            sensual_fg: Color::Reset,
            remix_fg: Color::Reset,
            others_fg: Color::Reset,

            fg: Color::Reset,
            bg: Color::Reset,
            dimmed_fg: Color::Reset,
            accent: Color::Reset,
            accent_alt: Color::Reset,
            error_fg: Color::Reset,

            border_style: Style::default(),
            focused_border_style: Style::default().add_modifier(Modifier::BOLD),

            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            active_tab_style: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            status_bar_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Returns the color for a song category.
    #[must_use]
    pub const fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Legend => self.legend_fg,
            Category::Sensual => self.sensual_fg,
            Category::Remix => self.remix_fg,
            Category::Others => self.others_fg,
        }
    }

    /// Returns the style for a song category.
    #[must_use]
    pub fn category_style(&self, category: Category) -> Style {
        Style::default().fg(self.category_color(category))
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
