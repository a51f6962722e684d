//! Unified error types for animals-web.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can abort an animals-web run.
///
/// Entries skipped during assembly are not errors; they are reported through
/// [`crate::assembler::SkippedEntry`] and never abort the run.
#[derive(Error, Debug)]
pub enum AnimalsWebError {
    // --- Input ---

    /// A required input file (data or page template) does not exist.
    #[error("the file {} was not found", path.display())]
    NotFound { path: PathBuf },

    /// An input file exists but could not be read (permissions, directory, invalid UTF-8).
    #[error("the file {} could not be read", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file exists but does not contain valid JSON.
    #[error("the file {} does not contain valid JSON", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed data is not a list of records.
    #[error("expected a list of animals, but got {found}")]
    InvalidShape { found: &'static str },

    // --- Rendering ---

    /// A fragment template failed to render.
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Output ---

    /// The output document could not be written.
    #[error("the file {} could not be written", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration ---

    /// An explicitly requested config file was not found.
    #[error("config file not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but could not be read.
    #[error("config file at {} could not be read", path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but contains invalid JSON.
    #[error("failed to parse config at {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Scaffolding ---

    /// Scaffolding would overwrite an existing file.
    #[error("file already exists: {} (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, AnimalsWebError>`.
pub type Result<T> = std::result::Result<T, AnimalsWebError>;
