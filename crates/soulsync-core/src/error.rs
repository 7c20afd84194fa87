use thiserror::Error;

/// Errors raised while loading a song catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

pub type Result<T> = std::result::Result<T, LoadError>;
