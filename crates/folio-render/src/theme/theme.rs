//! Theme struct for building class-list collections.
//!
//! Themes are named collections of styles that adapt to the page's color
//! mode. They support both programmatic construction and YAML loading.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use folio_render::{StyleValue, Theme};
//!
//! let theme = Theme::new()
//!     .add("accent", "text-blue-400")
//!     .add_adaptive("surface", "rounded-xl", Some("bg-white"), Some("bg-gray-800"))
//!     .add("link", StyleValue::alias("accent"));
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use folio_render::Theme;
//!
//! let theme = Theme::from_yaml(r#"
//! surface:
//!   class: rounded-xl
//!   light: bg-white
//!   dark: bg-gray-800
//! link: { alias: surface }
//! "#).unwrap();
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::style::{
    join_classes, parse_stylesheet, StyleValidationError, StyleValue, Styles, StylesheetError,
    ThemeVariants,
};

use super::adaptive::ColorMode;

/// A named collection of class lists used when rendering templates.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Display name; file-backed themes take the file stem.
    name: Option<String>,
    /// Base classes (always applied).
    base: HashMap<String, String>,
    /// Classes appended in light mode.
    light: HashMap<String, String>,
    /// Classes appended in dark mode.
    dark: HashMap<String, String>,
    /// Alias definitions (name -> target).
    aliases: HashMap<String, String>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Loads a theme from a YAML file.
    ///
    /// Parse errors carry the file path. The theme is named after the file
    /// stem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let variants = read_stylesheet(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        Ok(Self {
            name,
            ..Self::from_variants(variants)
        })
    }

    /// Parses an in-memory stylesheet.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let variants = parse_stylesheet(yaml)?;
        Ok(Self::from_variants(variants))
    }

    pub fn from_variants(variants: ThemeVariants) -> Self {
        Self {
            name: None,
            base: variants.base().clone(),
            light: variants.light().clone(),
            dark: variants.dark().clone(),
            aliases: variants.aliases().clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Adds a style whose classes are the same in both modes.
    ///
    /// Passing [`StyleValue::alias`] registers an alias instead.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        match value.into() {
            StyleValue::Classes(classes) => {
                self.base.insert(name.to_string(), classes);
            }
            StyleValue::Alias(target) => {
                self.aliases.insert(name.to_string(), target);
            }
        }
        self
    }

    /// Adds an adaptive style with base classes and per-mode additions.
    pub fn add_adaptive(
        mut self,
        name: &str,
        base: &str,
        light: Option<&str>,
        dark: Option<&str>,
    ) -> Self {
        self.base.insert(name.to_string(), base.to_string());
        if let Some(light) = light {
            self.light.insert(name.to_string(), light.to_string());
        }
        if let Some(dark) = dark {
            self.dark.insert(name.to_string(), dark.to_string());
        }
        self
    }

    /// Resolves styles for the given color mode.
    ///
    /// Each concrete style resolves to its base classes followed by the
    /// classes of `mode`, if any. Aliases are preserved and followed on
    /// lookup.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_render::{ColorMode, Theme};
    ///
    /// let theme = Theme::new().add_adaptive("page", "min-h-screen", Some("bg-gray-50"), Some("bg-gray-900"));
    /// let dark = theme.resolve_styles(Some(ColorMode::Dark));
    /// assert_eq!(dark.classes("page"), Some("min-h-screen bg-gray-900"));
    /// let neutral = theme.resolve_styles(None);
    /// assert_eq!(neutral.classes("page"), Some("min-h-screen"));
    /// ```
    pub fn resolve_styles(&self, mode: Option<ColorMode>) -> Styles {
        let mut styles = Styles::new();

        let mode_classes = match mode {
            Some(ColorMode::Light) => Some(&self.light),
            Some(ColorMode::Dark) => Some(&self.dark),
            None => None,
        };

        for (name, base) in &self.base {
            let classes = match mode_classes.and_then(|m| m.get(name)) {
                Some(extra) => join_classes(base, extra),
                None => join_classes(base, ""),
            };
            styles = styles.add(name, classes);
        }

        for (name, target) in &self.aliases {
            styles = styles.add(name, StyleValue::alias(target.as_str()));
        }

        styles
    }

    /// Fails on dangling or cyclic aliases.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.resolve_styles(None).validate()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.aliases.is_empty()
    }

    /// Number of styles, aliases included.
    pub fn len(&self) -> usize {
        self.base.len() + self.aliases.len()
    }

    /// Class list of one style in `mode`, following aliases.
    pub fn classes(&self, name: &str, mode: Option<ColorMode>) -> Option<String> {
        self.resolve_styles(mode).classes(name).map(str::to_string)
    }

    /// Layers `other` over this theme, replacing whole styles.
    pub fn merge(mut self, other: Theme) -> Self {
        for name in other.base.keys().chain(other.aliases.keys()) {
            self.base.remove(name);
            self.light.remove(name);
            self.dark.remove(name);
            self.aliases.remove(name);
        }
        self.base.extend(other.base);
        self.light.extend(other.light);
        self.dark.extend(other.dark);
        self.aliases.extend(other.aliases);
        self
    }
}

fn read_stylesheet(path: &Path) -> Result<ThemeVariants, StylesheetError> {
    let content = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    parse_stylesheet(&content).map_err(|err| match err {
        StylesheetError::Parse { message, .. } => StylesheetError::Parse {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_theme_new_is_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
    }

    #[test]
    fn test_theme_add_classes_and_alias() {
        let theme = Theme::new()
            .add("accent", "text-blue-400")
            .add("link", StyleValue::alias("accent"));
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.classes("link", None).as_deref(), Some("text-blue-400"));
    }

    #[test]
    fn test_adaptive_style_differs_by_mode() {
        let theme = Theme::new().add_adaptive("muted", "", Some("text-gray-600"), Some("text-gray-300"));
        assert_eq!(
            theme.classes("muted", Some(ColorMode::Light)).as_deref(),
            Some("text-gray-600")
        );
        assert_eq!(
            theme.classes("muted", Some(ColorMode::Dark)).as_deref(),
            Some("text-gray-300")
        );
    }

    #[test]
    fn test_non_adaptive_style_same_in_both_modes() {
        let theme = Theme::new().add("heading", "text-4xl font-bold");
        assert_eq!(
            theme.classes("heading", Some(ColorMode::Light)),
            theme.classes("heading", Some(ColorMode::Dark))
        );
    }

    #[test]
    fn test_validate_reports_dangling_alias() {
        let theme = Theme::new().add("card", StyleValue::alias("panel"));
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_merge_replaces_whole_style() {
        let base = Theme::new().add_adaptive("panel", "rounded", Some("bg-white"), Some("bg-black"));
        let user = Theme::new().add("panel", "rounded-none");
        let merged = base.merge(user);
        assert_eq!(
            merged.classes("panel", Some(ColorMode::Dark)).as_deref(),
            Some("rounded-none")
        );
    }

    #[test]
    fn test_from_file_named_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("midnight.yaml");
        std::fs::write(&path, "heading: text-4xl\n").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), Some("midnight"));
        assert_eq!(theme.classes("heading", None).as_deref(), Some("text-4xl"));
    }

    #[test]
    fn test_from_file_parse_error_carries_path() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "heading: [unclosed").unwrap();
        file.flush().unwrap();

        match Theme::from_file(file.path()).unwrap_err() {
            StylesheetError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }
}
