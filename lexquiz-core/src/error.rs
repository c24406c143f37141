//! Error types for the quiz engine

use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// A pattern field failed to compile
    #[error("invalid {field} pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Which of the five pattern fields was rejected
        field: &'static str,
        /// The offending pattern source
        pattern: String,
        /// Underlying regex error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The regex engine failed while scanning a text
    #[error("pattern scan failed: {0}")]
    Scan(#[from] Box<fancy_regex::Error>),

    /// A source file could not be read
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A derived source view could not be written
    #[error("failed to write source {path}: {source}")]
    SourceWrite {
        /// Path of the unwritable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A section range string could not be parsed
    #[error("invalid section range `{0}`")]
    SectionRange(String),

    /// A derived view disagrees with the original on sentence count
    #[error(
        "source views out of alignment for {path}: original has {original} sentences, \
         {view} has {derived}"
    )]
    ViewMismatch {
        /// Path of the original source file
        path: PathBuf,
        /// Name of the derived view
        view: &'static str,
        /// Sentence count of the original view
        original: usize,
        /// Sentence count of the derived view
        derived: usize,
    },
}

impl From<fancy_regex::Error> for CoreError {
    fn from(err: fancy_regex::Error) -> Self {
        CoreError::Scan(Box::new(err))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CoreError>;
