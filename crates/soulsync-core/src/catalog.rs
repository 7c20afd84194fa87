//! Song catalog loading.
//!
//! A [`Catalog`] is read once from a CSV dataset and never mutated again.
//! Rows with any missing required field are dropped rather than imputed,
//! and the surviving rows are renumbered so ids stay contiguous.
//!
//! # Example
//!
//! ```
//! use soulsync_core::Catalog;
//!
//! let data = "\
//! Song-Name,Singer/Artists,Genre,Album/Movie,Language,User-Rating
//! Perfect,Ed Sheeran,Pop,Divide,English,4.8
//! ,Unknown,Pop,Nothing,English,3.0
//! ";
//! let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.dropped_rows(), 1);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::{LoadError, Result};
use crate::model::{SongId, SongRecord};

/// Column holding the song title.
pub const COL_NAME: &str = "Song-Name";
/// Column holding the performing artists.
pub const COL_ARTISTS: &str = "Singer/Artists";
/// Column holding the genre.
pub const COL_GENRE: &str = "Genre";
/// Column holding the album or film.
pub const COL_ALBUM: &str = "Album/Movie";
/// Column holding the song language.
pub const COL_LANGUAGE: &str = "Language";
/// Column holding the listener rating.
pub const COL_RATING: &str = "User-Rating";

/// Columns every dataset must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_ARTISTS,
    COL_GENRE,
    COL_ALBUM,
    COL_LANGUAGE,
    COL_RATING,
];

/// Cell values that count as "no value", alongside empty cells.
const NA_VALUES: &[&str] = &[
    "#N/A", "#NA", "<NA>", "N/A", "NA", "NULL", "NaN", "-NaN", "None", "n/a", "nan", "-nan",
    "null",
];

/// Trim and case-fold a title for lookup.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Header positions of the required columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    artists: usize,
    genre: usize,
    album: usize,
    language: usize,
    rating: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let position = |column: &str| headers.iter().position(|h| h.trim() == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(**column).is_none())
            .map(|column| (*column).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns { columns: missing });
        }

        let index = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            name: index(COL_NAME),
            artists: index(COL_ARTISTS),
            genre: index(COL_GENRE),
            album: index(COL_ALBUM),
            language: index(COL_LANGUAGE),
            rating: index(COL_RATING),
        })
    }
}

/// Fetch a trimmed cell, treating absent, blank and NA cells as missing.
fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    let value = record.get(index)?.trim();
    if value.is_empty() || NA_VALUES.contains(&value) {
        None
    } else {
        Some(value)
    }
}

fn parse_rating(raw: &str, line: u64) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(rating) if rating.is_finite() => Some(rating),
        _ => {
            log::warn!("Line {}: unparseable rating {:?}, keeping song unrated", line, raw);
            None
        }
    }
}

/// The immutable, in-memory collection of songs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    songs: Vec<SongRecord>,
    dropped_rows: usize,
}

impl Catalog {
    /// Load a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened, and any error
    /// [`Catalog::from_reader`] returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading catalog from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a catalog from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingColumns`] if the header lacks a required
    /// column, or [`LoadError::Csv`] if the data cannot be read as CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::resolve(reader.headers()?)?;

        let mut songs = Vec::new();
        let mut dropped_rows = 0;

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            let fields = (
                cell(&record, columns.name),
                cell(&record, columns.artists),
                cell(&record, columns.genre),
                cell(&record, columns.album),
                cell(&record, columns.language),
                cell(&record, columns.rating),
            );
            let (Some(name), Some(artists), Some(genre), Some(album), Some(language), Some(rating)) =
                fields
            else {
                log::debug!("Line {}: dropping incomplete row", line);
                dropped_rows += 1;
                continue;
            };

            songs.push(SongRecord {
                id: SongId::new(songs.len()),
                name: name.to_string(),
                artists: artists.to_string(),
                genre: genre.to_string(),
                album: album.to_string(),
                language: language.to_string(),
                rating: parse_rating(rating, line),
            });
        }

        log::info!(
            "Loaded {} songs ({} incomplete rows dropped)",
            songs.len(),
            dropped_rows
        );

        Ok(Self {
            songs,
            dropped_rows,
        })
    }

    /// Build a catalog from records already in memory.
    ///
    /// Ids are reassigned from row order so they stay contiguous.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = SongRecord>) -> Self {
        let songs = records
            .into_iter()
            .enumerate()
            .map(|(index, song)| song.with_id(SongId::new(index)))
            .collect();
        Self {
            songs,
            dropped_rows: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: SongId) -> Option<&SongRecord> {
        self.songs.get(id.index())
    }

    #[must_use]
    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SongRecord> {
        self.songs.iter()
    }

    /// Number of source rows discarded for missing a required field.
    #[must_use]
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Distinct languages, in order of first appearance.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = Vec::new();
        for song in &self.songs {
            if !languages.contains(&song.language.as_str()) {
                languages.push(&song.language);
            }
        }
        languages
    }

    /// Find a song by title, ignoring case and surrounding whitespace.
    ///
    /// Titles are not unique; when several songs share a title the first one
    /// in catalog order wins. Only exact matches count.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&SongRecord> {
        let wanted = normalize_title(title);
        self.songs
            .iter()
            .find(|song| song.name.to_lowercase() == wanted)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SongRecord;
    type IntoIter = std::slice::Iter<'a, SongRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
