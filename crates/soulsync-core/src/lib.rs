//! Core domain model for soulsync.
//!
//! This crate defines the song record, its catalog identity, and the
//! loader that turns a tabular song dataset into an immutable, complete
//! [`Catalog`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{normalize_title, Catalog, REQUIRED_COLUMNS};
pub use error::{LoadError, Result};
pub use model::{SongId, SongRecord};
