//! Pre-registered template renderer.
//!
//! [`Renderer`] owns a theme, a template engine and a set of context
//! providers. Each render resolves the theme for one [`ColorMode`], so the
//! same renderer produces the light and the dark page.
//!
//! # File-Based Templates
//!
//! ```rust,ignore
//! use folio_render::{Renderer, Theme};
//!
//! let mut renderer = Renderer::new(Theme::from_file("themes/default.yaml")?)?;
//! renderer.add_template_dir("./templates")?;
//! let html = renderer.render("page.html", &page)?;
//! ```

use std::path::Path;

use serde::Serialize;

use super::engine::{MiniJinjaEngine, TemplateEngine};
use super::registry::walk_template_dir;
use super::STYLES_KEY;
use crate::context::{ContextRegistry, RenderContext};
use crate::error::RenderError;
use crate::theme::{detect_color_mode, ColorMode, Theme};

/// A renderer with pre-registered templates.
///
/// # Example
///
/// ```rust
/// use folio_render::{ColorMode, Renderer, Theme};
///
/// let theme = Theme::new().add_adaptive("toggle", "p-2", Some("bg-white"), Some("bg-gray-800"));
///
/// let mut renderer = Renderer::new(theme).unwrap();
/// renderer
///     .add_template("toggle.html", r#"<button class="{{ cls('toggle') }}">{{ label }}</button>"#)
///     .unwrap();
///
/// let data = serde_json::json!({"label": "Toggle"});
/// let light = renderer.render_in("toggle.html", &data, ColorMode::Light).unwrap();
/// let dark = renderer.render_in("toggle.html", &data, ColorMode::Dark).unwrap();
/// assert_eq!(light, r#"<button class="p-2 bg-white">Toggle</button>"#);
/// assert_eq!(dark, r#"<button class="p-2 bg-gray-800">Toggle</button>"#);
/// ```
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
    theme: Theme,
    context: ContextRegistry,
}

impl Renderer {
    /// Creates a renderer backed by MiniJinja.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are invalid (dangling or cyclic).
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        theme.validate()?;
        Ok(Self {
            engine: Box::new(MiniJinjaEngine::new()),
            theme,
            context: ContextRegistry::new(),
        })
    }

    /// Registers a named inline template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.engine.add_template(name, source)
    }

    /// Registers every template found under `path`.
    ///
    /// Templates already registered under the same name are replaced, so a
    /// directory can override built-in templates selectively.
    pub fn add_template_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, RenderError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(RenderError::OperationError(format!(
                "Template directory does not exist: {}",
                path.display()
            )));
        }

        let files = walk_template_dir(path)?;
        for file in &files {
            let source = std::fs::read_to_string(&file.absolute_path)?;
            self.engine.add_template(&file.name, &source)?;
            tracing::debug!(template = %file.name, path = %file.absolute_path.display(), "registered template");
        }
        Ok(files.len())
    }

    /// Returns true if a template with this name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(name)
    }

    /// Returns the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Mutable access to the context providers injected into every render.
    pub fn context_mut(&mut self) -> &mut ContextRegistry {
        &mut self.context
    }

    /// Renders a template in the color mode reported by the environment.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        self.render_in(name, data, detect_color_mode())
    }

    /// Renders a template with the theme resolved for `mode`.
    pub fn render_in<T: Serialize>(
        &self,
        name: &str,
        data: &T,
        mode: ColorMode,
    ) -> Result<String, RenderError> {
        let data = serde_json::to_value(data)?;
        let ctx = RenderContext::new(mode, &self.theme, &data);

        let mut context = self.context.resolve(&ctx);
        let styles = self.theme.resolve_styles(Some(mode)).to_class_map();
        context.insert(STYLES_KEY.to_string(), serde_json::to_value(styles)?);

        self.engine.render(name, &data, context)
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("theme", &self.theme.name())
            .field("context", &self.context)
            .finish()
    }
}
