//! Core traits for the query engine.
//!
//! This module defines the Filter trait that lets each predicate of a
//! [`MovieQuery`](crate::MovieQuery) be evaluated on its own and chained.

use data_loader::Movie;

/// A single predicate over movies.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared by concurrent readers
/// - Matching never fails; a movie either passes or it doesn't
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` satisfies this filter
    fn matches(&self, movie: &Movie) -> bool;
}
