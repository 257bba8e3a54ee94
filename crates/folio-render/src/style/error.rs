//! Style-related error types.
//!
//! This module contains errors for both style validation and stylesheet parsing.

use std::path::PathBuf;

/// Error returned when style validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// An alias references a style that doesn't exist
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for StyleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValidationError::UnresolvedAlias { from, to } => {
                write!(f, "style '{}' aliases non-existent style '{}'", from, to)
            }
            StyleValidationError::CycleDetected { path } => {
                write!(f, "cycle detected in style aliases: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for StyleValidationError {}

/// Error type for stylesheet loading and parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// The stylesheet could not be read.
    Load {
        /// Human-readable description including the path.
        message: String,
    },

    /// YAML parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Unknown attribute in a style definition.
    UnknownAttribute {
        /// Style name where the error occurred.
        style: String,
        /// The unknown attribute name.
        attribute: String,
    },

    /// Invalid style definition structure.
    InvalidDefinition {
        /// Style name where the error occurred.
        style: String,
        /// What is wrong with it.
        message: String,
    },

    /// Alias validation error (dangling reference or cycle).
    AliasError {
        /// The underlying validation error.
        source: StyleValidationError,
    },
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Load { message } => write!(f, "failed to load stylesheet: {}", message),
            StylesheetError::Parse { path, message } => match path {
                Some(p) => write!(f, "failed to parse stylesheet {}: {}", p.display(), message),
                None => write!(f, "failed to parse stylesheet: {}", message),
            },
            StylesheetError::UnknownAttribute { style, attribute } => {
                write!(f, "unknown attribute '{}' in style '{}'", attribute, style)
            }
            StylesheetError::InvalidDefinition { style, message } => {
                write!(f, "invalid definition for style '{}': {}", style, message)
            }
            StylesheetError::AliasError { source } => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for StylesheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StylesheetError::AliasError { source } => Some(source),
            _ => None,
        }
    }
}
