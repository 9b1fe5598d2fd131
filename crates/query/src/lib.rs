//! Query engine for the movie catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for each query predicate
//! - FilterPipeline for ANDing filters
//! - MovieQuery, the combined predicate
//! - QueryEngine / `search`, the capped, file-ordered evaluation
//!
//! ## Example Usage
//! ```ignore
//! use query::{MovieQuery, QueryEngine};
//! use std::sync::Arc;
//!
//! let engine = QueryEngine::new(Arc::new(catalog));
//!
//! let query = MovieQuery::new()
//!     .with_title("story")
//!     .with_genre("Animation")
//!     .with_year(1995);
//!
//! for movie in engine.search(&query) {
//!     println!("{} | {}", movie.id, movie.title);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod engine;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::MovieQuery;
pub use engine::{matching, search, search_with_limit, QueryEngine, DEFAULT_RESULT_LIMIT};
