//! MiniJinja filter and function registration.

use minijinja::{Environment, Error, ErrorKind, HtmlEscape, State, Value};

use super::STYLES_KEY;

/// Registers the folio filters and functions on a minijinja environment.
///
/// - `cls(name)`: class list of a theme style for the current color mode.
///   Unknown style names fail the render so typos surface immediately.
/// - `url`: attribute-safe escaping that keeps `/` intact.
/// - `slug`: ASCII, lowercase, dash-separated identifier.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_function("cls", cls);
    env.add_filter("url", |value: String| -> Value {
        Value::from_safe_string(escape_attr(&value))
    });
    env.add_filter("slug", |value: String| -> String { slugify(&value) });
}

fn cls(state: &State, name: String) -> Result<Value, Error> {
    let styles = state.lookup(STYLES_KEY).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            "cls() called outside a themed render",
        )
    })?;
    let classes = styles.get_attr(&name)?;
    if classes.is_undefined() || classes.is_none() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("unknown style '{}'", name),
        ));
    }
    Ok(Value::from_safe_string(escape_attr(&classes.to_string())))
}

/// Escapes a value for a double-quoted HTML attribute.
///
/// Same escaping as the engine's HTML autoescape, except `/` is kept so
/// URLs and class lists such as `bg-white/80` stay readable.
pub fn escape_attr(value: &str) -> String {
    HtmlEscape(value).to_string().replace("&#x2f;", "/")
}

/// Converts text into an identifier usable as an HTML anchor.
///
/// ```rust
/// use folio_render::template::filters::slugify;
///
/// assert_eq!(slugify("Convo-Sphere"), "convo-sphere");
/// assert_eq!(slugify("  Café  Déjà vu! "), "cafe-deja-vu");
/// ```
pub fn slugify(value: &str) -> String {
    let ascii = deunicode::deunicode(value).to_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn slug_is_dash_separated_ascii(input in "\\PC{0,40}") {
            let slug = slugify(&input);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn escaped_attr_has_no_raw_delimiters(input in "\\PC{0,40}") {
            let escaped = escape_attr(&input);
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('\''));
        }
    }
}
