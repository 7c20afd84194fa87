//! TF-IDF vectorization of feature blobs.
//!
//! Each blob becomes a sparse, L2-normalized term vector:
//!
//! ```text
//! tfidf(t, d) = count(t, d) × idf(t)
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! where `n` is the number of fitted documents and `df(t)` the number of them
//! containing `t`. Terms shared by many songs therefore weigh less than rare
//! ones.
//!
//! # Example
//!
//! ```
//! use soulsync_search::{StopWords, TfidfVectorizer};
//!
//! let docs = ["Arijit Singh Romantic Hindi", "Ed Sheeran Pop English"];
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words(StopWords::english());
//! let vectors = vectorizer.fit_transform(&docs);
//!
//! assert_eq!(vectors.len(), 2);
//! assert!((vectors[0].dot(&vectors[0]) - 1.0).abs() < 1e-9);
//! assert_eq!(vectors[0].dot(&vectors[1]), 0.0);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::stopwords::StopWords;

/// Split text into lowercase word tokens of at least two characters.
///
/// Word characters are Unicode alphanumerics and `_`; everything else
/// separates tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
}

/// A sparse vector with strictly increasing term indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from `(index, value)` pairs, summing repeated indices and
    /// dropping zeros.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for (index, value) in pairs {
            *merged.entry(index).or_insert(0.0) += value;
        }
        let (indices, values) = merged.into_iter().filter(|(_, v)| *v != 0.0).unzip();
        Self { indices, values }
    }

    /// Number of stored (non-zero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.indices
            .binary_search(&index)
            .map_or(0.0, |pos| self.values[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit length. Zero vectors stay zero.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
        self
    }

    /// Dot product, merging the two sorted index lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// TF-IDF vectorizer with a stop-word filter and smoothed IDF.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
    /// Term → column, numbered in lexicographic term order.
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// A vectorizer that keeps every token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    fn terms<'a>(&'a self, doc: &'a str) -> impl Iterator<Item = String> + 'a {
        tokenize(doc).filter(move |token| !self.stop_words.is_stop_word(token))
    }

    /// Learn the vocabulary and IDF weights from `documents`.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = self.terms(doc.as_ref()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.vocabulary = HashMap::with_capacity(doc_freq.len());
        self.idf = Vec::with_capacity(doc_freq.len());
        for (column, (term, df)) in doc_freq.into_iter().enumerate() {
            self.idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            self.vocabulary.insert(term, column);
        }

        log::debug!(
            "Fitted TF-IDF over {} documents, {} terms",
            documents.len(),
            self.idf.len()
        );
    }

    /// Weight `documents` against the fitted vocabulary.
    ///
    /// Terms unseen during fitting are ignored.
    #[must_use]
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents
            .iter()
            .map(|doc| {
                let weights = self.terms(doc.as_ref()).filter_map(|term| {
                    self.vocabulary
                        .get(&term)
                        .map(|&column| (column, self.idf[column]))
                });
                SparseVector::from_pairs(weights).normalized()
            })
            .collect()
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        self.fit(documents);
        self.transform(documents)
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Column assigned to `term`, if it is in the vocabulary.
    #[must_use]
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(&term.to_lowercase()).copied()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.column(term).map(|column| self.idf[column])
    }
}
