//! Event types for the TUI event loop.
//!
//! Events come from the terminal (keys, mouse, resize, paste, focus) and
//! from two timers: ticks drive animations and status expiry, render
//! events pace redraws.

use crossterm::event::{KeyEvent, MouseEvent};

/// Events that can be processed by the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// A mouse event from the terminal.
    Mouse(MouseEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Text pasted into the terminal (bracketed paste).
    Paste(String),

    /// Periodic tick for animations and updates.
    ///
    /// The tick rate is configured via `TuiConfig::tick_rate_ms`.
    Tick,

    /// Signal to render a new frame.
    Render,

    /// Focus gained by the terminal window.
    FocusGained,

    /// Focus lost by the terminal window.
    FocusLost,
}

impl Event {
    /// Returns `true` if this is a key event.
    #[inline]
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns `true` if this is a tick event.
    #[inline]
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }

    /// Returns `true` if this is a render event.
    #[inline]
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Returns the key event if this is a Key variant.
    #[inline]
    #[must_use]
    pub const fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_event_is_key() {
        let key_event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(key_event.is_key());
        assert!(!Event::Tick.is_key());
        assert!(!Event::Paste("a".to_owned()).is_key());
    }

    #[test]
    fn test_event_is_tick() {
        assert!(Event::Tick.is_tick());
        assert!(!Event::Render.is_tick());
        assert!(Event::Render.is_render());
    }

    #[test]
    fn test_event_as_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let event = Event::Key(key);
        assert_eq!(event.as_key().map(|k| k.code), Some(KeyCode::Enter));
        assert!(Event::Tick.as_key().is_none());
    }
}
