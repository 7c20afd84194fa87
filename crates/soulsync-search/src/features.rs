//! Combined-feature blobs.
//!
//! A song is compared to others only through its artists, genre, album and
//! language, joined into one string in that order.

use soulsync_core::{Catalog, SongRecord};

/// Join a song's artists, genre, album and language into one text blob.
#[must_use]
pub fn combined_features(song: &SongRecord) -> String {
    [
        song.artists.as_str(),
        song.genre.as_str(),
        song.album.as_str(),
        song.language.as_str(),
    ]
    .join(" ")
}

/// Feature blobs for every song, in catalog order.
#[must_use]
pub fn catalog_features(catalog: &Catalog) -> Vec<String> {
    catalog.iter().map(combined_features).collect()
}
