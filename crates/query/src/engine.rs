//! Query evaluation against a [`Catalog`].
//!
//! ## Algorithm
//! 1. An id in the query short-circuits everything: the answer is
//!    `Catalog::by_id`, or nothing
//! 2. Otherwise pick the scan order. With genres requested, walk the shortest
//!    genre posting list; without, walk every movie. Both are ascending
//!    positions, i.e. file order
//! 3. Keep movies that pass the query's [`FilterPipeline`]
//! 4. Stop once `limit` matches are collected
//!
//! Results are "the first N matches in file order", not ranked.

use crate::filter_pipeline::FilterPipeline;
use crate::query::MovieQuery;
use data_loader::{Catalog, Movie};
use std::sync::Arc;
use tracing::debug;

/// How many movies a search returns unless told otherwise
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Answers [`MovieQuery`]s over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
    limit: usize,
}

impl QueryEngine {
    /// Create an engine returning at most [`DEFAULT_RESULT_LIMIT`] results
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Change the result cap (builder pattern)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// First `limit` matches in file order
    pub fn search(&self, query: &MovieQuery) -> Vec<&Movie> {
        search_with_limit(&self.catalog, query, self.limit)
    }

    /// Every match in file order, uncapped and lazy
    pub fn search_all<'a>(&'a self, query: &MovieQuery) -> Box<dyn Iterator<Item = &'a Movie> + 'a> {
        matching(&self.catalog, query)
    }
}

/// Search with the default cap of [`DEFAULT_RESULT_LIMIT`]
pub fn search<'a>(catalog: &'a Catalog, query: &MovieQuery) -> Vec<&'a Movie> {
    search_with_limit(catalog, query, DEFAULT_RESULT_LIMIT)
}

/// Search returning at most `limit` movies.
///
/// Scanning stops as soon as the cap is reached.
pub fn search_with_limit<'a>(catalog: &'a Catalog, query: &MovieQuery, limit: usize) -> Vec<&'a Movie> {
    let results: Vec<&Movie> = matching(catalog, query).take(limit).collect();
    debug!(returned = results.len(), limit, "search finished");
    results
}

/// Lazy iterator over every movie matching `query`, in file order.
pub fn matching<'a>(catalog: &'a Catalog, query: &MovieQuery) -> Box<dyn Iterator<Item = &'a Movie> + 'a> {
    if let Some(id) = query.id() {
        debug!(id, "exclusive id lookup");
        return Box::new(catalog.by_id(id).into_iter());
    }

    let pipeline = FilterPipeline::from_query(query);
    debug!(filters = ?pipeline.names(), "scanning catalog");

    Box::new(
        scan_order(catalog, query)
            .filter_map(move |pos| catalog.get(pos))
            .filter(move |movie| pipeline.matches(movie)),
    )
}

/// Positions to visit, ascending.
///
/// A requested genre that nobody has yields an empty posting list, which is
/// then the shortest one, so the scan is empty straight away.
fn scan_order<'a>(catalog: &'a Catalog, query: &MovieQuery) -> Box<dyn Iterator<Item = usize> + 'a> {
    let shortest = query
        .genres_all()
        .iter()
        .map(|genre| catalog.genre_positions(genre))
        .min_by_key(|positions| positions.len());

    match shortest {
        Some(positions) => {
            debug!(candidates = positions.len(), "driving scan from genre index");
            Box::new(positions.iter().copied())
        }
        None => Box::new(0..catalog.len()),
    }
}
