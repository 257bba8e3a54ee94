//! Style primitives: class lists, aliases and stylesheet parsing.
//!
//! A style is a named, space-separated list of CSS classes. Styles can also
//! be aliases that point at another style, so templates can use semantic
//! names (`form-label`) that resolve to shared presentation styles (`label`).
//!
//! Most code interacts with styles through [`crate::Theme`], which keeps the
//! light and dark variants and resolves them into a [`Styles`] registry for
//! one [`crate::ColorMode`].

mod error;
mod parser;
mod registry;
mod value;

pub use error::{StyleValidationError, StylesheetError};
pub use parser::{parse_stylesheet, ThemeVariants};
pub use registry::Styles;
pub(crate) use value::join_classes;
pub use value::StyleValue;
