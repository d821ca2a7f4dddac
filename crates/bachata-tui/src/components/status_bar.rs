//! Status bar component.
//!
//! Displays the mode indicator, the current status message (or a key hint),
//! and the producer credit on the right.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, AppMode};
use crate::theme::Theme;

/// Credit shown at the right end of the status bar.
const PRODUCER: &str = "DJ Doberman";

/// The status bar component.
pub struct StatusBar<'a> {
    /// The application state.
    app: &'a App,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }

    /// Builds the left-hand status line.
    fn build_line(&self) -> Line<'a> {
        let mode_text = match self.app.mode {
            AppMode::Normal => "BROWSE",
            AppMode::Searching => "SEARCH",
            AppMode::Help => "HELP",
        };

        let mut spans = vec![
            Span::styled(format!(" {mode_text} "), self.theme.active_tab_style),
            Span::raw(" "),
        ];

        match self.app.status {
            Some(ref status) => {
                let style = if status.is_error {
                    self.theme.error_style()
                } else {
                    self.theme.base_style()
                };
                spans.push(Span::styled(status.text.clone(), style));
            }
            None => {
                let hint = match self.app.mode {
                    AppMode::Searching => "type to filter · Ctrl+u clear · Enter done",
                    AppMode::Help => "Esc close",
                    AppMode::Normal => "/ search · Enter play · ? help · q quit",
                };
                spans.push(Span::styled(hint, self.theme.dimmed_style()));
            }
        }

        Line::from(spans)
    }

    /// Builds the producer credit.
    fn credit(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("PRODUCED BY ", self.theme.dimmed_style()),
            Span::styled(
                PRODUCER,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ])
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let credit = self.credit();
        let credit_width = u16::try_from(credit.width()).unwrap_or(u16::MAX);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(credit_width)])
            .split(area);

        Paragraph::new(self.build_line())
            .style(self.theme.status_bar_style)
            .render(chunks[0], buf);
        Paragraph::new(credit)
            .style(self.theme.status_bar_style)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bachata_core::{AppState, Catalog, Config};

    use crate::action::Action;
    use crate::test_support::row_text;

    fn render(app: &App) -> String {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        (&StatusBar::new(app, &theme)).render(area, &mut buf);
        row_text(&buf, 0)
    }

    #[test]
    fn test_status_bar_shows_mode_hint_and_credit() {
        let app = App::new(Config::default(), Catalog::builtin(), AppState::new());
        let line = render(&app);
        assert!(line.starts_with(" BROWSE "));
        assert!(line.contains("? help"));
        assert!(line.ends_with("PRODUCED BY DJ Doberman"));
    }

    #[test]
    fn test_status_message_replaces_hint() {
        let mut app = App::new(Config::default(), Catalog::builtin(), AppState::new());
        app.update(Action::EnterSearchMode);
        app.update(Action::ShowStatus("Opening YouTube".to_owned()));

        let line = render(&app);
        assert!(line.starts_with(" SEARCH "));
        assert!(line.contains("Opening YouTube"));
        assert!(!line.contains("Ctrl+u"));
    }

    #[test]
    fn test_credit_width_matches_text() {
        let theme = Theme::dark();
        let app = App::new(Config::default(), Catalog::builtin(), AppState::new());
        let bar = StatusBar::new(&app, &theme);
        assert_eq!(bar.credit().width(), "PRODUCED BY ".width() + PRODUCER.width() + 1);
    }
}
