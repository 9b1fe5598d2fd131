//! Exact release year filter.

use crate::traits::Filter;
use data_loader::{Movie, Year};

/// Keeps movies released in exactly one year.
///
/// Movies with an unknown year never pass.
pub struct YearFilter {
    year: Year,
}

impl YearFilter {
    pub fn new(year: Year) -> Self {
        Self { year }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.year == Some(self.year)
    }
}
