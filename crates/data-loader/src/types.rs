//! Core domain types for the movie catalog.
//!
//! - [`Movie`]: one parsed dataset row
//! - [`Catalog`]: every movie plus the lookup structures derived from them
//!
//! The catalog is built once (see [`Catalog::build`] in `index.rs`) and never
//! mutated afterwards, so it can be shared behind an `Arc` by any number of
//! readers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, the first column of the dataset
pub type MovieId = i32;

/// Release year pulled out of a title such as "Toy Story (1995)"
pub type Year = i32;

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// Title with the trailing " (YYYY)" removed when a year was found
    pub title: String,
    /// `None` when the title carries no parseable year
    pub year: Option<Year>,
    /// Genres in source order and source case. Repeats are kept.
    pub genres: Vec<String>,
}

impl Movie {
    /// Case-insensitive membership test against this movie's genres.
    ///
    /// `genre_lower` must already be lowercased. ASCII genres are compared
    /// without allocating; only non-ASCII ones get lowercased.
    pub fn has_genre(&self, genre_lower: &str) -> bool {
        self.genres.iter().any(|g| {
            if g.is_ascii() {
                g.eq_ignore_ascii_case(genre_lower)
            } else {
                g.to_lowercase() == genre_lower
            }
        })
    }
}

// =============================================================================
// Catalog - The In-Memory Database
// =============================================================================

/// All movies of a dataset plus the indices used to query them.
///
/// Positions (`usize`) always refer to the index into `movies`, which keeps
/// file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Every parsed movie, in file order
    pub(crate) movies: Vec<Movie>,

    /// Movie id to position. Later duplicates overwrite earlier ones.
    pub(crate) id_index: HashMap<MovieId, usize>,

    /// Lowercased genre to ascending, distinct positions
    pub(crate) genre_index: HashMap<String, Vec<usize>>,

    /// Sorted distinct genres in their original case
    pub(crate) genre_vocabulary: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of movies, duplicates included
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All movies in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movie stored at `position`
    pub fn get(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    /// Get a movie by ID
    ///
    /// For a duplicated id this is the last occurrence in the file.
    pub fn by_id(&self, id: MovieId) -> Option<&Movie> {
        self.id_index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Sorted distinct genres, original case, for presenting choices
    pub fn genres(&self) -> &[String] {
        &self.genre_vocabulary
    }

    /// Positions of movies tagged with `genre`, compared case-insensitively.
    ///
    /// Returns an empty slice for a genre nobody has.
    pub fn genre_positions(&self, genre: &str) -> &[usize] {
        self.genre_index
            .get(&genre.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Movies tagged with `genre`, in file order
    pub fn movies_in_genre<'a>(&'a self, genre: &str) -> impl Iterator<Item = &'a Movie> + 'a {
        self.genre_positions(genre)
            .iter()
            .map(move |&pos| &self.movies[pos])
    }

    /// Number of distinct ids; lower than `len()` when ids repeat
    pub fn distinct_ids(&self) -> usize {
        self.id_index.len()
    }
}
