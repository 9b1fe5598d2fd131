//! # Data Loader Crate
//!
//! Turns a movies CSV (`movieId,title,genres`) into an in-memory [`Catalog`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **parser**: Parse raw CSV lines into movies, quoting and year extraction
//! - **index**: Build the catalog indices and load whole datasets
//! - **error**: Error types for parsing and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Catalog, LoadOptions};
//! use std::path::Path;
//!
//! let report = Catalog::load_from_file(Path::new("data/movies.csv"), &LoadOptions::default())?;
//! let catalog = report.catalog;
//!
//! let movie = catalog.by_id(1).unwrap();
//! println!("{} ({:?}) {:?}", movie.title, movie.year, movie.genres);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, RecordError, Result};
pub use index::{load_catalog, LoadOptions, LoadReport, MalformedLinePolicy, SkippedLine};
pub use parser::parse_line;
pub use types::{Catalog, Movie, MovieId, Year};
