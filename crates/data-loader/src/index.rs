//! Catalog building and dataset loading.
//!
//! - [`Catalog::build`] derives the id index, the case-folded genre index and
//!   the genre vocabulary from an ordered list of movies
//! - [`load_catalog`] runs raw lines through the parser and builds a catalog,
//!   applying the caller's policy for malformed lines
//! - [`Catalog::load_from_file`] does the same for a file on disk

use crate::error::{DataLoadError, RecordError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};

// =============================================================================
// Load configuration
// =============================================================================

/// What to do with a line whose id (or quoting) is broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Stop the whole load at the first bad line
    #[default]
    Abort,
    /// Log the line, remember it in the report and keep going
    Skip,
}

/// Options for [`load_catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Discard the first line as a column header
    pub has_header: bool,
    pub on_malformed: MalformedLinePolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            on_malformed: MalformedLinePolicy::Abort,
        }
    }
}

impl LoadOptions {
    /// Options that skip bad lines instead of aborting
    pub fn lenient() -> Self {
        Self {
            on_malformed: MalformedLinePolicy::Skip,
            ..Self::default()
        }
    }
}

/// A line dropped under [`MalformedLinePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based physical line number
    pub line: usize,
    pub reason: RecordError,
}

/// Result of a successful load
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    /// Empty unless the policy was [`MalformedLinePolicy::Skip`]
    pub skipped: Vec<SkippedLine>,
}

// =============================================================================
// Loading
// =============================================================================

/// Parse raw dataset lines and build a [`Catalog`] from them.
///
/// Blank lines are ignored. Line numbers in errors and in the report count
/// every physical line, header included.
pub fn load_catalog<I, S>(lines: I, options: &LoadOptions) -> Result<LoadReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut movies = Vec::new();
    let mut skipped = Vec::new();

    let data_lines = lines
        .into_iter()
        .enumerate()
        .skip(usize::from(options.has_header));

    for (idx, line) in data_lines {
        let line_no = idx + 1;
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue; // Skip empty lines
        }

        match parser::parse_line(line) {
            Ok(movie) => movies.push(movie),
            Err(reason) => match options.on_malformed {
                MalformedLinePolicy::Abort => {
                    return Err(DataLoadError::Parse {
                        line: line_no,
                        source: reason,
                    });
                }
                MalformedLinePolicy::Skip => {
                    warn!(line = line_no, %reason, "skipping malformed line");
                    skipped.push(SkippedLine {
                        line: line_no,
                        reason,
                    });
                }
            },
        }
    }

    let catalog = Catalog::build(movies);
    info!(
        movies = catalog.len(),
        genres = catalog.genres().len(),
        skipped = skipped.len(),
        "catalog loaded"
    );

    Ok(LoadReport { catalog, skipped })
}

impl Catalog {
    /// Load a movies CSV from disk.
    ///
    /// Opening and reading the file is the only I/O; everything else is
    /// [`load_catalog`].
    pub fn load_from_file(path: &Path, options: &LoadOptions) -> Result<LoadReport> {
        info!("Loading movies from {:?}", path);
        let lines = parser::read_lines_lossy(path)?;
        load_catalog(lines, options)
    }

    /// Build a catalog from movies in file order.
    ///
    /// Never fails. Duplicate ids all stay in `movies`, but `by_id` resolves
    /// to the last one.
    pub fn build(movies: Vec<Movie>) -> Self {
        let id_index = build_id_index(&movies);
        let genre_index = build_genre_index(&movies);
        let genre_vocabulary = build_genre_vocabulary(&movies);

        if id_index.len() < movies.len() {
            debug!(
                duplicates = movies.len() - id_index.len(),
                "duplicate movie ids, last occurrence wins"
            );
        }

        Self {
            movies,
            id_index,
            genre_index,
            genre_vocabulary,
        }
    }
}

impl FromIterator<Movie> for Catalog {
    fn from_iter<T: IntoIterator<Item = Movie>>(iter: T) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

// =============================================================================
// Index construction
// =============================================================================

fn build_id_index(movies: &[Movie]) -> HashMap<MovieId, usize> {
    movies
        .iter()
        .enumerate()
        .map(|(pos, movie)| (movie.id, pos))
        .collect()
}

/// Positions are pushed in ascending order, so checking the tail is enough
/// to keep each position once per key. That covers "Comedy|Comedy" and
/// "Sci-Fi|SCI-FI" on the same movie alike.
fn build_genre_index(movies: &[Movie]) -> HashMap<String, Vec<usize>> {
    let mut genre_index: HashMap<String, Vec<usize>> = HashMap::new();

    for (pos, movie) in movies.iter().enumerate() {
        for genre in &movie.genres {
            let positions = genre_index.entry(genre.to_lowercase()).or_default();
            if positions.last() != Some(&pos) {
                positions.push(pos);
            }
        }
    }

    genre_index
}

fn build_genre_vocabulary(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|movie| movie.genres.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
