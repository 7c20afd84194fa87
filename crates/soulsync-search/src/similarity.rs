//! Pairwise cosine similarity over the whole catalog.

use soulsync_core::Catalog;

use crate::features::catalog_features;
use crate::stopwords::StopWords;
use crate::tfidf::{SparseVector, TfidfVectorizer};

/// Dense, symmetric `n × n` similarity matrix.
///
/// Entry `(i, j)` is the cosine similarity of songs `i` and `j`, clamped to
/// `[0, 1]`. The diagonal is exactly `1.0`, so every row peaks at its own
/// song. Built once; never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the matrix from unit-length term vectors.
    #[must_use]
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let dim = vectors.len();
        let mut scores = vec![0.0; dim * dim];

        for i in 0..dim {
            scores[i * dim + i] = 1.0;
            for j in (i + 1)..dim {
                let score = vectors[i].dot(&vectors[j]).clamp(0.0, 1.0);
                scores[i * dim + j] = score;
                scores[j * dim + i] = score;
            }
        }

        Self { dim, scores }
    }

    /// Vectorize every song's feature blob and compute the matrix.
    ///
    /// Returns the matrix together with the vocabulary size.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, stop_words: StopWords) -> (Self, usize) {
        let blobs = catalog_features(catalog);
        let mut vectorizer = TfidfVectorizer::new().with_stop_words(stop_words);
        let vectors = vectorizer.fit_transform(&blobs);

        let matrix = Self::from_vectors(&vectors);
        log::info!(
            "Built {}x{} similarity matrix over {} terms",
            matrix.dim(),
            matrix.dim(),
            vectorizer.vocabulary_size()
        );
        (matrix, vectorizer.vocabulary_size())
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.dim && j < self.dim).then(|| self.scores[i * self.dim + j])
    }

    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.dim).then(|| &self.scores[i * self.dim..(i + 1) * self.dim])
    }

    /// Columns of row `i` ordered by descending score.
    ///
    /// The sort is stable, so equal scores keep catalog order.
    #[must_use]
    pub fn ranked(&self, i: usize) -> Vec<(usize, f64)> {
        let Some(row) = self.row(i) else {
            return Vec::new();
        };
        let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
