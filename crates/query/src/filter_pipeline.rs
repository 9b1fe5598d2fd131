//! The FilterPipeline ANDs multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern.

use crate::filters::{GenresAllFilter, TitleContainsFilter, YearFilter};
use crate::query::MovieQuery;
use crate::traits::Filter;
use data_loader::Movie;

/// Chains multiple filters; a movie matches when every filter accepts it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleContainsFilter::new("story"))
///     .add_filter(YearFilter::new(1995));
///
/// let hit = pipeline.matches(movie);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for the non-id predicates of `query`.
    ///
    /// Filters are added title first, then year, then genres. Only the ones
    /// the query sets are added.
    pub fn from_query(query: &MovieQuery) -> Self {
        let mut pipeline = Self::new();

        if let Some(keyword) = query.title_keyword() {
            pipeline = pipeline.add_filter(TitleContainsFilter::new(keyword));
        }
        if let Some(year) = query.year() {
            pipeline = pipeline.add_filter(YearFilter::new(year));
        }
        if !query.genres_all().is_empty() {
            pipeline = pipeline.add_filter(GenresAllFilter::new(query.genres_all()));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Whether `movie` passes every filter, stopping at the first rejection.
    ///
    /// An empty pipeline accepts everything.
    pub fn matches(&self, movie: &Movie) -> bool {
        self.filters.iter().all(|filter| filter.matches(movie))
    }

    /// Filter names in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: Option<i32>, genres: &[&str]) -> Movie {
        Movie {
            id: 1,
            title: title.to_string(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());
        assert!(pipeline.matches(&movie("Anything", None, &[])));
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(YearFilter::new(1995));

        assert!(pipeline.matches(&movie("Heat", Some(1995), &[])));
        assert!(!pipeline.matches(&movie("Heat", Some(1996), &[])));
    }

    #[test]
    fn test_from_query_order() {
        let query = MovieQuery::new()
            .with_genre("Comedy")
            .with_year(1995)
            .with_title("toy");

        let pipeline = FilterPipeline::from_query(&query);
        assert_eq!(
            pipeline.names(),
            vec!["TitleContainsFilter", "YearFilter", "GenresAllFilter"]
        );
    }

    #[test]
    fn test_from_query_skips_unset_predicates() {
        let pipeline = FilterPipeline::from_query(&MovieQuery::new().with_year(2001));
        assert_eq!(pipeline.names(), vec!["YearFilter"]);

        let pipeline = FilterPipeline::from_query(&MovieQuery::new());
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_all_filters_must_pass() {
        let query = MovieQuery::new()
            .with_title("story")
            .with_year(1995)
            .with_genre("comedy");
        let pipeline = FilterPipeline::from_query(&query);

        assert!(pipeline.matches(&movie("Toy Story", Some(1995), &["Animation", "Comedy"])));
        assert!(!pipeline.matches(&movie("Toy Story", Some(1999), &["Animation", "Comedy"])));
        assert!(!pipeline.matches(&movie("Toy Story", Some(1995), &["Animation"])));
        assert!(!pipeline.matches(&movie("Heat", Some(1995), &["Comedy"])));
    }
}
