//! Style registry for managing named class lists.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::error::StyleValidationError;
use super::value::StyleValue;

/// A collection of named styles resolved for a single color mode.
///
/// Styles can be concrete class lists or aliases to other styles, enabling
/// layered styling (semantic -> presentation -> visual).
///
/// # Example
///
/// ```rust
/// use folio_render::{Styles, StyleValue};
///
/// let styles = Styles::new()
///     .add("muted", "text-gray-600")
///     .add("caption", StyleValue::alias("muted"));
///
/// assert_eq!(styles.classes("caption"), Some("text-gray-600"));
/// assert_eq!(styles.classes("typo"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, StyleValue>,
}

impl Styles {
    /// Creates an empty style registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. Returns self for chaining.
    ///
    /// If a style with the same name exists, it is replaced.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    /// Resolves a style name to its class list, following alias chains.
    ///
    /// Returns `None` if the style doesn't exist or if a cycle is detected.
    /// For detailed error information, use [`validate`](Self::validate) instead.
    pub fn classes(&self, name: &str) -> Option<&str> {
        let mut current = name;
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current) {
                return None;
            }
            match self.styles.get(current)? {
                StyleValue::Classes(classes) => return Some(classes),
                StyleValue::Alias(next) => current = next,
            }
        }
    }

    /// Validates that all style aliases resolve correctly.
    ///
    /// Returns `Ok(())` if all aliases point to existing styles with no cycles.
    /// Returns an error describing the first problem found, checking style
    /// names in sorted order so the reported problem is stable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_render::{Styles, StyleValidationError, StyleValue};
    ///
    /// let dangling = Styles::new().add("orphan", StyleValue::alias("nonexistent"));
    /// assert!(matches!(
    ///     dangling.validate(),
    ///     Err(StyleValidationError::UnresolvedAlias { .. })
    /// ));
    ///
    /// let cycle = Styles::new()
    ///     .add("a", StyleValue::alias("b"))
    ///     .add("b", StyleValue::alias("a"));
    /// assert!(matches!(
    ///     cycle.validate(),
    ///     Err(StyleValidationError::CycleDetected { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.styles.keys().collect();
        names.sort();
        for name in names {
            if let Some(StyleValue::Alias(target)) = self.styles.get(name) {
                self.validate_alias_chain(name, target)?;
            }
        }
        Ok(())
    }

    fn validate_alias_chain(&self, name: &str, target: &str) -> Result<(), StyleValidationError> {
        let mut current = target;
        let mut path = vec![name.to_string()];

        loop {
            let value = match self.styles.get(current) {
                Some(value) => value,
                None => {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: path.last().cloned().unwrap_or_default(),
                        to: current.to_string(),
                    })
                }
            };

            let seen = path.iter().any(|p| p == current);
            path.push(current.to_string());
            if seen {
                return Err(StyleValidationError::CycleDetected { path });
            }

            match value {
                StyleValue::Classes(_) => return Ok(()),
                StyleValue::Alias(next) => current = next,
            }
        }
    }

    /// Returns every resolvable style name mapped to its class list.
    ///
    /// Styles that cannot be resolved (cycles, dangling aliases) are omitted.
    pub fn to_class_map(&self) -> BTreeMap<String, String> {
        self.styles
            .keys()
            .filter_map(|name| {
                self.classes(name)
                    .map(|classes| (name.clone(), classes.to_string()))
            })
            .collect()
    }

    /// Returns true if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Returns the number of registered styles, aliases included.
    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alias_chain() {
        let styles = Styles::new()
            .add("label", "block text-sm font-medium")
            .add("form-label", StyleValue::alias("label"))
            .add("contact-label", StyleValue::alias("form-label"));
        assert_eq!(
            styles.classes("contact-label"),
            Some("block text-sm font-medium")
        );
    }

    #[test]
    fn test_resolve_cycle_returns_none() {
        let styles = Styles::new()
            .add("a", StyleValue::alias("b"))
            .add("b", StyleValue::alias("a"));
        assert_eq!(styles.classes("a"), None);
    }

    #[test]
    fn test_validate_self_referential_cycle() {
        let styles = Styles::new().add("loop", StyleValue::alias("loop"));
        match styles.validate().unwrap_err() {
            StyleValidationError::CycleDetected { path } => {
                assert_eq!(path, vec!["loop".to_string(), "loop".to_string()]);
            }
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_three_way_cycle() {
        let styles = Styles::new()
            .add("a", StyleValue::alias("b"))
            .add("b", StyleValue::alias("c"))
            .add("c", StyleValue::alias("a"));
        match styles.validate().unwrap_err() {
            StyleValidationError::CycleDetected { path } => {
                assert_eq!(path, vec!["a", "b", "c", "a"]);
            }
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_dangling_alias() {
        let styles = Styles::new().add("orphan", StyleValue::alias("missing"));
        assert_eq!(
            styles.validate(),
            Err(StyleValidationError::UnresolvedAlias {
                from: "orphan".into(),
                to: "missing".into(),
            })
        );
    }

    #[test]
    fn test_class_map_skips_unresolvable() {
        let styles = Styles::new()
            .add("ok", "p-2")
            .add("alias", StyleValue::alias("ok"))
            .add("broken", StyleValue::alias("missing"));
        let map = styles.to_class_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["alias"], "p-2");
        assert!(!map.contains_key("broken"));
    }
}
