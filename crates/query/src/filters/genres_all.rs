//! Filter to keep only movies carrying every requested genre.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies that have all of the requested genres.
///
/// ## Algorithm
/// 1. Lowercase the requested genres once, up front
/// 2. For each movie, every requested genre must equal one of the movie's
///    genres after lowercasing
/// 3. No requested genres means every movie passes
pub struct GenresAllFilter {
    genres_lower: Vec<String>,
}

impl GenresAllFilter {
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genres_lower: genres
                .into_iter()
                .map(|g| g.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Filter for GenresAllFilter {
    fn name(&self) -> &str {
        "GenresAllFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.genres_lower.iter().all(|wanted| movie.has_genre(wanted))
    }
}
