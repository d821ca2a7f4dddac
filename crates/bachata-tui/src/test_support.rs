//! Helpers shared by widget tests.

use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// Returns the text of one buffer row, skipping the filler cells that
/// follow wide characters.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    let mut text = String::new();
    let mut x = area.x;
    while x < area.right() {
        let symbol = buf[(x, y)].symbol();
        text.push_str(symbol);
        x += u16::try_from(symbol.width().max(1)).unwrap_or(1);
    }
    text.trim_end().to_owned()
}

/// Returns every row of the buffer joined with newlines.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}
