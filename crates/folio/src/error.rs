//! Error types for the folio crate.

use std::path::PathBuf;

use folio_render::{RenderError, StylesheetError};
use thiserror::Error;

/// Errors that can occur while loading, rendering or writing the page.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A theme stylesheet could not be loaded.
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`crate::FolioConfig`].
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing output or copying assets failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A string did not name one of the page sections.
    #[error(transparent)]
    UnknownSection(#[from] crate::section::UnknownSection),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl FolioError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
