//! YAML stylesheet parsing.
//!
//! A stylesheet is a YAML mapping from style name to definition:
//!
//! ```yaml
//! # Shorthand: a plain class list, identical in both modes
//! heading: "text-4xl font-bold"
//!
//! # Adaptive: base classes plus per-mode additions
//! panel:
//!   class: "rounded-xl shadow-xl"
//!   light: "bg-white/80"
//!   dark: "bg-gray-800/80"
//!
//! # Alias to another style
//! card: { alias: panel }
//! ```

use std::collections::HashMap;

use serde_yaml::Value;

use super::error::StylesheetError;
use super::registry::Styles;
use super::value::StyleValue;

/// The parsed contents of a stylesheet, split by mode.
#[derive(Debug, Clone, Default)]
pub struct ThemeVariants {
    base: HashMap<String, String>,
    light: HashMap<String, String>,
    dark: HashMap<String, String>,
    aliases: HashMap<String, String>,
}

impl ThemeVariants {
    /// Base class lists, used in every mode.
    pub fn base(&self) -> &HashMap<String, String> {
        &self.base
    }

    /// Classes added in light mode.
    pub fn light(&self) -> &HashMap<String, String> {
        &self.light
    }

    /// Classes added in dark mode.
    pub fn dark(&self) -> &HashMap<String, String> {
        &self.dark
    }

    /// Alias definitions (name -> target).
    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }
}

/// Parses a YAML stylesheet into [`ThemeVariants`].
///
/// Aliases are validated after parsing; a dangling alias or a cycle is
/// reported as [`StylesheetError::AliasError`].
pub fn parse_stylesheet(yaml: &str) -> Result<ThemeVariants, StylesheetError> {
    let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
        path: None,
        message: e.to_string(),
    })?;

    let mut variants = ThemeVariants::default();
    let mapping = match root {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(variants),
        _ => {
            return Err(StylesheetError::Parse {
                path: None,
                message: "stylesheet root must be a mapping".to_string(),
            })
        }
    };

    for (key, value) in mapping {
        let name = match key {
            Value::String(name) => name,
            other => {
                return Err(StylesheetError::Parse {
                    path: None,
                    message: format!("style names must be strings, found {:?}", other),
                })
            }
        };
        parse_definition(&mut variants, name, value)?;
    }

    validate_variants(&variants)?;
    Ok(variants)
}

fn parse_definition(
    variants: &mut ThemeVariants,
    name: String,
    value: Value,
) -> Result<(), StylesheetError> {
    match value {
        Value::String(classes) => {
            variants.base.insert(name, classes);
            Ok(())
        }
        Value::Mapping(fields) => {
            let mut class = None;
            let mut light = None;
            let mut dark = None;
            let mut alias = None;

            for (field, field_value) in fields {
                let field = field.as_str().unwrap_or_default().to_string();
                let text = field_value
                    .as_str()
                    .ok_or_else(|| StylesheetError::InvalidDefinition {
                        style: name.clone(),
                        message: format!("'{}' must be a string", field),
                    })?
                    .to_string();
                match field.as_str() {
                    "class" => class = Some(text),
                    "light" => light = Some(text),
                    "dark" => dark = Some(text),
                    "alias" => alias = Some(text),
                    _ => {
                        return Err(StylesheetError::UnknownAttribute {
                            style: name,
                            attribute: field,
                        })
                    }
                }
            }

            if let Some(target) = alias {
                if class.is_some() || light.is_some() || dark.is_some() {
                    return Err(StylesheetError::InvalidDefinition {
                        style: name,
                        message: "an alias cannot also define classes".to_string(),
                    });
                }
                variants.aliases.insert(name, target);
                return Ok(());
            }

            if let Some(light) = light {
                variants.light.insert(name.clone(), light);
            }
            if let Some(dark) = dark {
                variants.dark.insert(name.clone(), dark);
            }
            variants.base.insert(name, class.unwrap_or_default());
            Ok(())
        }
        _ => Err(StylesheetError::InvalidDefinition {
            style: name,
            message: "expected a class string or a mapping".to_string(),
        }),
    }
}

fn validate_variants(variants: &ThemeVariants) -> Result<(), StylesheetError> {
    let mut styles = Styles::new();
    for (name, classes) in &variants.base {
        styles = styles.add(name, classes.as_str());
    }
    for (name, target) in &variants.aliases {
        styles = styles.add(name, StyleValue::alias(target.as_str()));
    }
    styles
        .validate()
        .map_err(|source| StylesheetError::AliasError { source })
}
