//! # Folio Render - Themed HTML Rendering
//!
//! `folio-render` turns templates and serializable data into HTML whose class
//! attributes follow an adaptive light/dark theme.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Named collection of class lists that respond to light/dark mode
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`Renderer`]: Pre-registered templates rendered for a given [`ColorMode`]
//! - `cls('name')`: Template function resolving a theme style to its classes
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_render::{ColorMode, Renderer, Theme};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Card {
//!     title: String,
//! }
//!
//! let theme = Theme::new()
//!     .add("title", "text-2xl font-semibold")
//!     .add_adaptive("body", "mb-6", Some("text-gray-600"), Some("text-gray-300"));
//!
//! let mut renderer = Renderer::new(theme).unwrap();
//! renderer
//!     .add_template("card.html", r#"<h3 class="{{ cls('title') }}">{{ title }}</h3><p class="{{ cls('body') }}"></p>"#)
//!     .unwrap();
//!
//! let html = renderer
//!     .render_in("card.html", &Card { title: "Hello".into() }, ColorMode::Dark)
//!     .unwrap();
//! assert!(html.contains(r#"class="mb-6 text-gray-300""#));
//! ```
//!
//! ## Adaptive Themes (Light & Dark)
//!
//! Every style has base classes; a style may add extra classes for light
//! mode, dark mode, or both. Themes can be loaded from YAML:
//!
//! ```rust
//! use folio_render::Theme;
//!
//! let theme = Theme::from_yaml(r#"
//! heading: "text-4xl font-bold"
//! panel:
//!   class: "rounded-xl shadow-xl"
//!   light: "bg-white/80"
//!   dark: "bg-gray-800/80"
//! card: { alias: panel }
//! "#).unwrap();
//! assert_eq!(theme.len(), 3);
//! ```

pub mod context;
mod error;
pub mod style;
pub mod template;
pub mod theme;

pub use context::{ContextProvider, ContextRegistry, RenderContext};
pub use error::RenderError;
pub use style::{
    parse_stylesheet, StyleValidationError, StyleValue, Styles, StylesheetError, ThemeVariants,
};
pub use template::{
    register_filters, walk_template_dir, MiniJinjaEngine, Renderer, TemplateEngine,
    TemplateFile, TEMPLATE_EXTENSIONS,
};
pub use theme::{detect_color_mode, set_theme_detector, ColorMode, Theme};
