//! Recommendation error types.

use thiserror::Error;

/// Errors that can occur while answering a recommendation query.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// No catalog song carries the queried title.
    #[error("no song titled {title:?} in the catalog")]
    NotFound { title: String },

    /// The similarity matrix was built over a different catalog.
    #[error("similarity matrix is {matrix}x{matrix} but the catalog holds {catalog} songs")]
    DimensionMismatch { catalog: usize, matrix: usize },
}

impl RecommendError {
    /// Returns `true` when the query simply had no match, which callers
    /// report as "no results" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias for recommendation results.
pub type RecommendResult<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = RecommendError::NotFound {
            title: "xyz".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no song titled \"xyz\" in the catalog");

        let err = RecommendError::DimensionMismatch {
            catalog: 3,
            matrix: 2,
        };
        assert!(!err.is_not_found());
    }
}
