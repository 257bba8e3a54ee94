//! Template rendering for themed HTML pages.
//!
//! Templates are Jinja2 (via MiniJinja). Style classes come from the active
//! [`crate::Theme`] through the `cls('name')` function, so a template never
//! hardcodes light or dark colors:
//!
//! ```jinja
//! <p class="{{ cls('role') }}">{{ profile.role }}</p>
//! ```
//!
//! Templates whose name ends in `.html` are HTML auto-escaped. Use the `url`
//! filter for `href`/`src` attributes and `slug` to derive anchor ids.
//!
//! ## Key Types
//!
//! - [`Renderer`]: Registered templates rendered for a color mode
//! - [`TemplateEngine`]: Backend abstraction, implemented by [`MiniJinjaEngine`]
//! - [`walk_template_dir`]: Discover template files on disk

mod engine;
pub mod filters;
mod registry;
mod renderer;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use filters::register_filters;
pub use registry::{walk_template_dir, TemplateFile, TEMPLATE_EXTENSIONS};
pub use renderer::Renderer;

/// Context key holding the resolved class map for `cls()`.
pub(crate) const STYLES_KEY: &str = "__styles";
