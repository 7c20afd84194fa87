use serde::{Deserialize, Serialize};

use crate::model::ids::SongId;

/// A single song row from the catalog.
///
/// Records read by [`Catalog::load`](crate::Catalog::load) are complete: the
/// loader drops any source row with a missing field, so their text fields
/// are non-empty. Records built by hand with [`SongRecord::new`] may leave
/// fields empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: SongId,

    /// Title, from the `Song-Name` column.
    pub name: String,

    /// Performing artists, from `Singer/Artists`.
    pub artists: String,

    pub genre: String,

    /// Album or film the song appears on, from `Album/Movie`.
    pub album: String,

    pub language: String,

    /// Listener rating out of 5. `None` when the source cell held a value
    /// that is not a number.
    pub rating: Option<f64>,
}

impl SongRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SongId::new(0),
            name: name.into(),
            artists: String::new(),
            genre: String::new(),
            album: String::new(),
            language: String::new(),
            rating: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: SongId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_artists(mut self, artists: impl Into<String>) -> Self {
        self.artists = artists.into();
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}
