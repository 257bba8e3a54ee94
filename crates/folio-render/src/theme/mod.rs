//! Adaptive themes with light/dark mode support.
//!
//! A theme maps style names to CSS class lists. Each style carries base
//! classes and may add classes for light mode, dark mode or both, so shared
//! layout classes are written once and only colors differ per mode:
//!
//! ```yaml
//! nav-label:
//!   class: "py-1 px-2 rounded-md text-sm capitalize"
//!   light: "text-gray-600"
//!   dark: "text-gray-300"
//! ```
//!
//! ## How Resolution Works
//!
//! When resolving a style in Dark mode the dark classes are appended to the
//! base classes. A style without a dark entry resolves to its base classes.
//!
//! ## Color Mode Detection
//!
//! [`detect_color_mode`] queries the OS for the user's preferred scheme.
//! Override it for testing with [`set_theme_detector`]:
//!
//! ```rust,ignore
//! folio_render::set_theme_detector(|| ColorMode::Dark);
//! ```

mod adaptive;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use theme::Theme;
