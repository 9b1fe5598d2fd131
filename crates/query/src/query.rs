//! The query predicate accepted by the engine.

use data_loader::{MovieId, Year};
use std::collections::BTreeSet;

/// Combined search predicate. Every field is optional.
///
/// - `id` is exclusive: when set, the other fields are ignored entirely
/// - the remaining fields are ANDed together
///
/// Genres are stored lowercased and deduplicated. An empty title keyword is
/// the same as no keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    id: Option<MovieId>,
    title_contains: Option<String>,
    genres_all: BTreeSet<String>,
    year: Option<Year>,
}

impl MovieQuery {
    /// A query that matches every movie
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a single movie by id
    pub fn by_id(id: MovieId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    /// Case-insensitive title substring
    pub fn with_title(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.title_contains = (!keyword.is_empty()).then_some(keyword);
        self
    }

    /// Require one more genre. Blank input is ignored.
    pub fn with_genre(mut self, genre: impl AsRef<str>) -> Self {
        let genre = genre.as_ref().trim();
        if !genre.is_empty() {
            self.genres_all.insert(genre.to_lowercase());
        }
        self
    }

    pub fn with_genres<I, S>(self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        genres.into_iter().fold(self, |query, g| query.with_genre(g))
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn id(&self) -> Option<MovieId> {
        self.id
    }

    pub fn title_keyword(&self) -> Option<&str> {
        self.title_contains.as_deref()
    }

    /// Requested genres, lowercased
    pub fn genres_all(&self) -> &BTreeSet<String> {
        &self.genres_all
    }

    pub fn year(&self) -> Option<Year> {
        self.year
    }
}
