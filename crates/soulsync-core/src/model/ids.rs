use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a song within its catalog.
///
/// Ids are zero-based and contiguous: a catalog of `n` songs holds exactly
/// the ids `0..n`, in row order. They double as row/column indices into the
/// similarity matrix built over the same catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(usize);

impl SongId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for SongId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
