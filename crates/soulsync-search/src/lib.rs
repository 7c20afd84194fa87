//! Similarity search and recommendation for soulsync.
//!
//! Turns each song's metadata into a TF-IDF weighted term vector, builds
//! the pairwise cosine similarity matrix over the whole catalog, and ranks
//! the nearest songs to a queried title.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod features;
pub mod recommend;
pub mod similarity;
pub mod stopwords;
pub mod tfidf;

pub use config::Config;
pub use error::{RecommendError, RecommendResult};
pub use features::{catalog_features, combined_features};
pub use recommend::{recommend, RecommendContext, Recommendation, DEFAULT_LIMIT};
pub use similarity::SimilarityMatrix;
pub use stopwords::StopWords;
pub use tfidf::{SparseVector, TfidfVectorizer};
