//! Case-insensitive substring match on titles.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose title contains a keyword, ignoring case.
///
/// The title is the one stored in the catalog, i.e. with the year already
/// stripped, so "1995" never matches "Toy Story (1995)" through the title.
pub struct TitleContainsFilter {
    keyword_lower: String,
}

impl TitleContainsFilter {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword_lower: keyword.to_lowercase(),
        }
    }
}

impl Filter for TitleContainsFilter {
    fn name(&self) -> &str {
        "TitleContainsFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.title.to_lowercase().contains(&self.keyword_lower)
    }
}
