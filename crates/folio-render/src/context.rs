//! Context injection for template rendering.
//!
//! Templates receive the serialized page data plus values produced by
//! [`ContextProvider`]s. Providers see a [`RenderContext`] describing the
//! render in progress (color mode, theme, data) and return a value that is
//! exposed to the template under the provider's name.
//!
//! # Example
//!
//! ```rust
//! use folio_render::context::{ContextRegistry, RenderContext};
//! use folio_render::{ColorMode, Theme};
//!
//! let mut registry = ContextRegistry::new();
//! registry.add_provider("is_dark", |ctx: &RenderContext| {
//!     serde_json::Value::Bool(ctx.color_mode.is_dark())
//! });
//!
//! let theme = Theme::new();
//! let data = serde_json::json!({});
//! let ctx = RenderContext::new(ColorMode::Dark, &theme, &data);
//! let values = registry.resolve(&ctx);
//! assert_eq!(values["is_dark"], serde_json::Value::Bool(true));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::theme::{ColorMode, Theme};

/// Information available at render time for context providers.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// The color mode the page is rendered in.
    pub color_mode: ColorMode,

    /// The theme being used for rendering.
    pub theme: &'a Theme,

    /// The page data, serialized as JSON.
    pub data: &'a serde_json::Value,
}

impl<'a> RenderContext<'a> {
    /// Creates a new render context with the given parameters.
    pub fn new(color_mode: ColorMode, theme: &'a Theme, data: &'a serde_json::Value) -> Self {
        Self {
            color_mode,
            theme,
            data,
        }
    }
}

/// Produces a value to inject into the template context.
///
/// Closures of type `Fn(&RenderContext) -> serde_json::Value` implement this
/// trait, so most providers are plain closures.
pub trait ContextProvider {
    /// Produces the value for this render.
    fn provide(&self, ctx: &RenderContext) -> serde_json::Value;
}

impl<F> ContextProvider for F
where
    F: Fn(&RenderContext) -> serde_json::Value,
{
    fn provide(&self, ctx: &RenderContext) -> serde_json::Value {
        (self)(ctx)
    }
}

/// Named context providers, resolved together before each render.
#[derive(Default)]
pub struct ContextRegistry {
    providers: Vec<(String, Box<dyn ContextProvider>)>,
}

impl ContextRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under `name`, replacing any previous one.
    pub fn add_provider<F>(&mut self, name: impl Into<String>, provider: F)
    where
        F: Fn(&RenderContext) -> serde_json::Value + 'static,
    {
        let name = name.into();
        self.providers.retain(|(existing, _)| *existing != name);
        self.providers.push((name, Box::new(provider)));
    }

    /// Returns true if a provider with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.providers.iter().any(|(existing, _)| existing == name)
    }

    /// Runs every provider against `ctx`.
    pub fn resolve(&self, ctx: &RenderContext) -> HashMap<String, serde_json::Value> {
        self.providers
            .iter()
            .map(|(name, provider)| (name.clone(), provider.provide(ctx)))
            .collect()
    }

    /// Returns true if no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ContextRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextRegistry")
            .field(
                "providers",
                &self.providers.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .finish()
    }
}
