//! Style value types for class lists and aliases.

/// A style value that is either a concrete class list or an alias to another style.
///
/// String conversions produce class lists; aliases are created explicitly
/// with [`StyleValue::alias`] so a class name can never be mistaken for a
/// style reference.
///
/// # Example
///
/// ```rust
/// use folio_render::{StyleValue, Theme};
///
/// let theme = Theme::new()
///     .add("muted", "text-gray-600")
///     .add("caption", StyleValue::alias("muted"));
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// Space-separated CSS classes.
    Classes(String),
    /// An alias referencing another style by name.
    Alias(String),
}

impl StyleValue {
    /// Creates an alias to the style named `target`.
    pub fn alias(target: impl Into<String>) -> Self {
        StyleValue::Alias(target.into())
    }
}

impl From<&str> for StyleValue {
    fn from(classes: &str) -> Self {
        StyleValue::Classes(classes.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(classes: String) -> Self {
        StyleValue::Classes(classes)
    }
}

/// Joins two class lists, skipping empty parts.
pub(crate) fn join_classes(base: &str, extra: &str) -> String {
    base.split_whitespace()
        .chain(extra.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
