//! The compiled-in song catalog.
//!
//! The catalog is an immutable, ordered slice fixed at build time. It never
//! changes size or contents during a session, so views borrow songs from it
//! with a `'static` lifetime.

use crate::types::Category::{Legend, Others, Remix, Sensual};
use crate::types::{CategoryFilter, Song};

/// Songs shipped with the application, in display order.
static BUILTIN_SONGS: &[Song] = &[
    // Legend
    Song::new("Obsesión", "Aventura", Legend, 2002),
    Song::new("Un Beso", "Aventura", Legend, 2005),
    Song::new("Los Infieles", "Aventura", Legend, 2007),
    Song::new("El Malo", "Aventura", Legend, 2009),
    Song::new("Dile al Amor", "Aventura", Legend, 2009),
    Song::new("Promise", "Romeo Santos", Legend, 2011),
    Song::new("Yo También", "Romeo Santos", Legend, 2011),
    Song::new("Propuesta Indecente", "Romeo Santos", Legend, 2013),
    Song::new("Eres Mía", "Romeo Santos", Legend, 2014),
    Song::new("Odio", "Romeo Santos", Legend, 2014),
    Song::new("Imitadora", "Romeo Santos", Legend, 2017),
    Song::new("Sobredosis", "Romeo Santos", Legend, 2018),
    Song::new("Stand by Me", "Prince Royce", Legend, 2010),
    Song::new("Corazón Sin Cara", "Prince Royce", Legend, 2010),
    Song::new("Incondicional", "Prince Royce", Legend, 2012),
    Song::new("Darte un Beso", "Prince Royce", Legend, 2013),
    Song::new("Deja Vu", "Prince Royce", Legend, 2017),
    // Sensual
    Song::new("Me Emborracharé", "Grupo Extra", Sensual, 2013),
    Song::new("Te Extraño", "Xtreme", Sensual, 2006),
    Song::new("Lloro Por Ti", "Dani J", Sensual, 2017),
    Song::new("Quizás", "Dani J", Sensual, 2019),
    Song::new("Ojalá", "Kewin Cosmos", Sensual, 2020),
    Song::new("Noche de Luna", "Kewin Cosmos", Sensual, 2021),
    Song::new("Solo Tú", "Grupo Extra", Sensual, 2016),
    Song::new("Amor de Madrugada", "Daniel Santacruz", Sensual, 2015),
    // Remix
    Song::new("Shape of You (Bachata Version)", "DJ Tronky", Remix, 2017),
    Song::new("Perfect (Bachata Version)", "Dani J", Remix, 2018),
    Song::new("Señorita (Bachata Remix)", "DJ Khalid", Remix, 2019),
    Song::new("Despacito (Bachata Version)", "DJ Tronky", Remix, 2017),
    Song::new("Someone Like You (Bachata Version)", "Kewin Cosmos", Remix, 2020),
    Song::new("Bailando (Bachata Remix)", "DJ Khalid", Remix, 2014),
    // Others
    Song::new("Bachata Rosa", "Juan Luis Guerra", Others, 1990),
    Song::new("Burbujas de Amor", "Juan Luis Guerra", Others, 1990),
    Song::new("Hoja en Blanco", "Monchy & Alexandra", Others, 1999),
    Song::new("Dos Locos", "Monchy & Alexandra", Others, 2003),
    Song::new("Tengo un Amor", "Toby Love", Others, 2006),
    Song::new("Bachata en Fukuoka", "Juan Luis Guerra", Others, 2010),
    Song::new("La Diabla", "Romeo Santos", Others, 2011),
    Song::new("Cuando Volverás", "Aventura", Others, 2002),
];

/// An immutable, ordered view over a static list of songs.
///
/// # Examples
///
/// ```
/// use bachata_core::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert!(!catalog.is_empty());
/// assert_eq!(catalog.songs().len(), catalog.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    songs: &'static [Song],
}

impl Catalog {
    /// Wraps a static song list.
    #[must_use]
    pub const fn new(songs: &'static [Song]) -> Self {
        Self { songs }
    }

    /// Returns the catalog compiled into the application.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_SONGS)
    }

    /// Returns every song in catalog order.
    #[inline]
    #[must_use]
    pub const fn songs(&self) -> &'static [Song] {
        self.songs
    }

    /// Returns the number of songs.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.songs.len()
    }

    /// Returns `true` if the catalog holds no songs.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Returns the song at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static Song> {
        self.songs.get(index)
    }

    /// Returns how many songs pass a category filter, ignoring search text.
    #[must_use]
    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.songs
            .iter()
            .filter(|song| filter.matches(song.category))
            .count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
