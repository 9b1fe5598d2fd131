//! Filter implementations for the query engine.
//!
//! Each predicate of a movie query has one filter here. A
//! [`FilterPipeline`](crate::FilterPipeline) ANDs them together.

pub mod genres_all;
pub mod title_contains;
pub mod year;

// Re-export for convenience
pub use genres_all::GenresAllFilter;
pub use title_contains::TitleContainsFilter;
pub use year::YearFilter;
