use std::path::PathBuf;
use thiserror::Error;

/// Largest number of entries the common-word list can supply
pub const MAX_STOPWORDS: usize = 1000;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Malformed source: {0}")]
    MalformedSource(String),

    #[error("Stop-word count {requested} is out of range (0..={max})")]
    InvalidRange { requested: usize, max: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern Error: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),
}

pub type Result<T> = std::result::Result<T, FolioError>;
