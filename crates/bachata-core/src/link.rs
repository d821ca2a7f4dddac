//! Outbound video search links.
//!
//! A selected song links to a video platform search for
//! `"<artist> <title> bachata"`. Building the URL is pure string work; the
//! link is only opened when the user asks for it.
//!
//! ```
//! use bachata_core::{link, Category, Song};
//!
//! let song = Song::new("Obsesión", "Aventura", Category::Legend, 2002);
//! assert_eq!(
//!     link::search_url(&song),
//!     "https://www.youtube.com/results?search_query=Aventura%20Obsesi%C3%B3n%20bachata"
//! );
//! ```

use crate::types::Song;

/// Search endpoint the encoded query is appended to.
pub const SEARCH_ENDPOINT: &str = "https://www.youtube.com/results?search_query=";

/// Word appended to every search so results stay on genre.
pub const QUERY_SUFFIX: &str = "bachata";

/// Returns the unencoded search query for a song.
#[must_use]
pub fn search_query(song: &Song) -> String {
    format!("{} {} {QUERY_SUFFIX}", song.artist, song.title)
}

/// Returns the full search URL for a song, with the query percent-encoded.
#[must_use]
pub fn search_url(song: &Song) -> String {
    format!("{SEARCH_ENDPOINT}{}", urlencoding::encode(&search_query(song)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_search_query() {
        let song = Song::new("Darte un Beso", "Prince Royce", Category::Others, 2013);
        assert_eq!(search_query(&song), "Prince Royce Darte un Beso bachata");
    }

    #[test]
    fn test_search_url_encodes_spaces_and_accents() {
        let song = Song::new("Eres Mía", "Romeo Santos", Category::Legend, 2014);
        assert_eq!(
            search_url(&song),
            "https://www.youtube.com/results?search_query=Romeo%20Santos%20Eres%20M%C3%ADa%20bachata"
        );
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        let song = Song::new("Dos Locos", "Monchy & Alexandra", Category::Others, 2003);
        let url = search_url(&song);
        assert!(url.starts_with(SEARCH_ENDPOINT));
        assert!(url.contains("Monchy%20%26%20Alexandra"));
        assert!(!url[SEARCH_ENDPOINT.len()..].contains('&'));
    }
}
