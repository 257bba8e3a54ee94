//! Template engine abstraction.
//!
//! [`Renderer`](super::Renderer) talks to templates only through
//! [`TemplateEngine`]; [`MiniJinjaEngine`] is the implementation used by
//! default. Templates whose name ends in `.html` are HTML auto-escaped.

use std::collections::HashMap;

use minijinja::{Environment, Value};

use super::filters::register_filters;
use crate::error::RenderError;

/// Named templates rendered against JSON data.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and registers a template, replacing any template of the same name.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    fn has_template(&self, name: &str) -> bool;

    /// Renders `name` with the top-level keys of `data` and `globals` in scope.
    ///
    /// On a key conflict the value from `data` wins.
    fn render(
        &self,
        name: &str,
        data: &serde_json::Value,
        globals: HashMap<String, serde_json::Value>,
    ) -> Result<String, RenderError>;
}

/// The default engine, with the `cls` function and the `url`/`slug` filters.
///
/// ```rust
/// use std::collections::HashMap;
/// use folio_render::{MiniJinjaEngine, TemplateEngine};
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.add_template("hello.html", "Hello, {{ name }}!").unwrap();
/// let data = serde_json::json!({"name": "<World>"});
/// let output = engine.render("hello.html", &data, HashMap::new()).unwrap();
/// assert_eq!(output, "Hello, &lt;World&gt;!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self { env }
    }

    /// Access to the underlying environment, e.g. to register more filters.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn render(
        &self,
        name: &str,
        data: &serde_json::Value,
        globals: HashMap<String, serde_json::Value>,
    ) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;

        let mut scope: HashMap<String, Value> = globals
            .into_iter()
            .map(|(key, value)| (key, Value::from_serialize(&value)))
            .collect();
        if let serde_json::Value::Object(fields) = data {
            for (key, value) in fields {
                scope.insert(key.clone(), Value::from_serialize(value));
            }
        }

        Ok(template.render(&scope)?)
    }
}
