//! # Genre Module
//!
//! The closed set of movie genres offered in the selection menu. The same
//! per-language labels drive both the keyboard buttons and input validation,
//! so the bot accepts exactly the labels it showed.

use std::fmt;

/// Supported movie genres
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Comedy,
    ScienceFiction,
    Horror,
    Action,
    Drama,
}

impl Genre {
    /// All genres in menu order
    pub const ALL: [Genre; 5] = [
        Genre::Comedy,
        Genre::ScienceFiction,
        Genre::Horror,
        Genre::Action,
        Genre::Drama,
    ];

    /// (Russian, English) labels. The Russian label doubles as the
    /// catalog's genre name.
    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Genre::Comedy => ("комедия", "comedy"),
            Genre::ScienceFiction => ("фантастика", "science fiction"),
            Genre::Horror => ("ужасы", "horror"),
            Genre::Action => ("боевик", "action"),
            Genre::Drama => ("драма", "drama"),
        }
    }

    /// Name of the genre in the catalog's taxonomy
    pub fn catalog_name(self) -> &'static str {
        self.labels().0
    }

    /// Button label for the given language, Russian for anything but English
    pub fn label(self, language: &str) -> &'static str {
        let (ru, en) = self.labels();
        if language == "en" {
            en
        } else {
            ru
        }
    }

    /// Parse user input against the menu labels of `language`, ignoring
    /// case and surrounding whitespace
    pub fn parse(input: &str, language: &str) -> Option<Genre> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        Genre::ALL
            .into_iter()
            .find(|genre| genre.label(language) == normalized)
    }

    /// Menu labels for the given language, in menu order
    pub fn menu_labels(language: &str) -> Vec<&'static str> {
        Genre::ALL.iter().map(|genre| genre.label(language)).collect()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}
