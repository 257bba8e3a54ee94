//! The document surface the page shell runs against.
//!
//! [`Document`] is the DOM-equivalent boundary: an environment color-scheme
//! query, elements addressable by id, scrolling, a class list on the root
//! element, and viewport intersection watching. [`HeadlessDocument`] is the
//! in-memory implementation used by the CLI and tests.

mod headless;
mod layout;

pub use headless::{HeadlessDocument, HeadlessDocumentBuilder, ScrollRequest};
pub use layout::{Element, Viewport};

use folio_render::ColorMode;

use crate::observer::{IntersectionCallback, Subscription};

/// How a scroll request moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Instant,
    /// Animate to the target.
    Smooth,
}

/// The host environment a mounted page talks to.
///
/// All methods take `&self`; implementations use interior mutability the way
/// a browser DOM does. Everything runs on one thread.
pub trait Document {
    /// The environment's preferred color scheme, read once per call.
    fn color_scheme(&self) -> ColorMode;

    /// Ids of the elements that carry a section identifier, in document order.
    fn section_ids(&self) -> Vec<String>;

    /// Whether an element with this id is mounted.
    fn contains(&self, id: &str) -> bool;

    /// Scrolls the element with `id` into view.
    ///
    /// Returns `false`, without scrolling, when no such element exists.
    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool;

    /// Adds (`present = true`) or removes a class on the root element.
    fn set_root_class(&self, class: &str, present: bool);

    /// Classes currently on the root element, in insertion order.
    fn root_classes(&self) -> Vec<String>;

    fn root_has_class(&self, class: &str) -> bool {
        self.root_classes().iter().any(|c| c == class)
    }

    /// Watches `targets` for visibility crossings of `threshold`.
    ///
    /// The watcher stays registered until the returned subscription is dropped.
    fn observe_intersections(
        &self,
        targets: &[String],
        threshold: f64,
        callback: IntersectionCallback,
    ) -> Subscription;
}
