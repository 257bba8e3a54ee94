//! Error types for template rendering.
//!
//! This module provides [`RenderError`], the error type for all rendering
//! operations. It abstracts over the template engine's errors so callers
//! never match on minijinja types directly.

use std::fmt;

/// Error type for template rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error, unknown filter/function, or failed evaluation.
    TemplateError(String),

    /// Template not found in the renderer.
    TemplateNotFound(String),

    /// Data serialization error.
    SerializationError(String),

    /// Style validation error (dangling alias, cycle, bad stylesheet).
    StyleError(String),

    /// I/O error (e.g., reading a template or theme from disk).
    IoError(std::io::Error),

    /// Other operational error.
    OperationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::StyleError(msg) => write!(f, "style error: {}", msg),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
            RenderError::OperationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<crate::style::StylesheetError> for RenderError {
    fn from(err: crate::style::StylesheetError) -> Self {
        RenderError::StyleError(err.to_string())
    }
}

impl From<crate::style::StyleValidationError> for RenderError {
    fn from(err: crate::style::StyleValidationError) -> Self {
        RenderError::StyleError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod
            | ErrorKind::InvalidOperation => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}
