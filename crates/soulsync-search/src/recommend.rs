//! Title-based song recommendation.
//!
//! Given a song title, find that song in the catalog and return the songs
//! whose metadata is closest to it.
//!
//! # Example
//!
//! ```
//! use soulsync_core::{Catalog, SongRecord};
//! use soulsync_search::{RecommendContext, StopWords};
//!
//! let catalog = Catalog::from_records(vec![
//!     SongRecord::new("Tum Hi Ho").with_artists("Arijit Singh").with_genre("Romantic"),
//!     SongRecord::new("Channa Mereya").with_artists("Arijit Singh").with_genre("Romantic"),
//!     SongRecord::new("Perfect").with_artists("Ed Sheeran").with_genre("Pop"),
//! ]);
//! let context = RecommendContext::build(catalog, StopWords::english());
//!
//! let songs = context.recommend("  tum hi ho ").unwrap();
//! assert_eq!(songs[0].name, "Channa Mereya");
//! assert!(context.recommend("Not A Real Song").unwrap_err().is_not_found());
//! ```

use serde::{Deserialize, Serialize};
use soulsync_core::{Catalog, SongRecord};

use crate::error::{RecommendError, RecommendResult};
use crate::similarity::SimilarityMatrix;
use crate::stopwords::StopWords;

/// How many songs a query returns unless told otherwise.
pub const DEFAULT_LIMIT: usize = 6;

/// A recommended song as shown to the listener.
///
/// Similarity scores stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub genre: String,
    pub rating: Option<f64>,
}

impl From<&SongRecord> for Recommendation {
    fn from(song: &SongRecord) -> Self {
        Self {
            name: song.name.clone(),
            artists: song.artists.clone(),
            album: song.album.clone(),
            genre: song.genre.clone(),
            rating: song.rating,
        }
    }
}

/// Recommend up to `limit` songs similar to the one titled `query_title`.
///
/// The title is matched after trimming and case-folding; the first catalog
/// song with that title is the query song. Candidates are ranked by
/// descending similarity, ties in catalog order, and the query song itself
/// is never returned.
pub fn recommend_with_limit(
    query_title: &str,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    limit: usize,
) -> RecommendResult<Vec<Recommendation>> {
    if matrix.dim() != catalog.len() {
        return Err(RecommendError::DimensionMismatch {
            catalog: catalog.len(),
            matrix: matrix.dim(),
        });
    }

    let query = catalog
        .find_by_title(query_title)
        .ok_or_else(|| RecommendError::NotFound {
            title: query_title.trim().to_string(),
        })?;
    let query_index = query.id.index();

    log::debug!("Recommending for {:?} ({})", query.name, query.id);

    let recommendations = matrix
        .ranked(query_index)
        .into_iter()
        .filter(|&(index, _)| index != query_index)
        .take(limit)
        .filter_map(|(index, _)| catalog.songs().get(index))
        .map(Recommendation::from)
        .collect();

    Ok(recommendations)
}

/// Recommend up to [`DEFAULT_LIMIT`] songs similar to `query_title`.
pub fn recommend(
    query_title: &str,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
) -> RecommendResult<Vec<Recommendation>> {
    recommend_with_limit(query_title, catalog, matrix, DEFAULT_LIMIT)
}

/// A catalog paired with the similarity matrix built from it.
///
/// Built once at startup and only read afterwards, so it can be shared
/// freely between queries.
#[derive(Debug, Clone)]
pub struct RecommendContext {
    catalog: Catalog,
    matrix: SimilarityMatrix,
    vocabulary_size: usize,
}

impl RecommendContext {
    /// Vectorize `catalog` and compute its similarity matrix.
    #[must_use]
    pub fn build(catalog: Catalog, stop_words: StopWords) -> Self {
        let (matrix, vocabulary_size) = SimilarityMatrix::from_catalog(&catalog, stop_words);
        Self {
            catalog,
            matrix,
            vocabulary_size,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Distinct terms left after tokenizing and stop-word removal.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn recommend(&self, query_title: &str) -> RecommendResult<Vec<Recommendation>> {
        recommend(query_title, &self.catalog, &self.matrix)
    }

    pub fn recommend_with_limit(
        &self,
        query_title: &str,
        limit: usize,
    ) -> RecommendResult<Vec<Recommendation>> {
        recommend_with_limit(query_title, &self.catalog, &self.matrix, limit)
    }
}
