//! An in-memory [`Document`] with a simulated vertical layout.
//!
//! Sections are stacked top to bottom in the order they are added. Scrolling,
//! whether requested through [`Document::scroll_into_view`] or simulated with
//! [`HeadlessDocument::scroll_to`], recomputes visible ratios and notifies the
//! registered intersection watchers.

use std::cell::{Cell, RefCell};

use folio_render::{detect_color_mode, ColorMode};

use super::layout::{Element, Viewport};
use super::{Document, ScrollBehavior};
use crate::observer::{IntersectionCallback, IntersectionWatcher, Subscription, WatcherSet};

/// A scroll performed through [`Document::scroll_into_view`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: String,
    pub behavior: ScrollBehavior,
    /// Viewport offset after the scroll.
    pub offset: f64,
}

#[derive(Debug)]
pub struct HeadlessDocument {
    elements: Vec<Element>,
    viewport: RefCell<Viewport>,
    color_scheme: Cell<ColorMode>,
    root_classes: RefCell<Vec<String>>,
    scrolls: RefCell<Vec<ScrollRequest>>,
    watchers: WatcherSet,
}

impl HeadlessDocument {
    pub fn builder() -> HeadlessDocumentBuilder {
        HeadlessDocumentBuilder::default()
    }

    /// The page layout with the environment's color scheme.
    pub fn standard() -> Self {
        HeadlessDocumentBuilder::standard().build()
    }

    /// Changes the environment preference. Mounted pages are not notified.
    pub fn set_color_scheme(&self, mode: ColorMode) {
        self.color_scheme.set(mode);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn scroll_top(&self) -> f64 {
        self.viewport.borrow().scroll_top
    }

    /// Total height of the laid-out document.
    pub fn height(&self) -> f64 {
        self.elements.iter().map(Element::bottom).fold(0.0, f64::max)
    }

    /// Scrolls requested through [`Document::scroll_into_view`], oldest first.
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.scrolls.borrow().clone()
    }

    /// Simulates the user scrolling to `offset` and notifies watchers.
    pub fn scroll_to(&self, offset: f64) {
        let height = self.height();
        self.viewport.borrow_mut().scroll_to(offset, height);
        self.notify();
    }

    /// Visible ratio of every element at the current scroll position.
    pub fn visible_ratios(&self) -> Vec<(String, f64)> {
        let viewport = *self.viewport.borrow();
        self.elements
            .iter()
            .map(|e| (e.id.clone(), viewport.visible_ratio(e)))
            .collect()
    }

    /// Hands raw visibility ratios to the watchers, bypassing the layout.
    ///
    /// Every observed target is reported, judged against each watcher's
    /// threshold.
    pub fn deliver_intersections(&self, ratios: &[(&str, f64)]) {
        let ratios: Vec<(String, f64)> = ratios
            .iter()
            .map(|(id, ratio)| (id.to_string(), *ratio))
            .collect();
        self.watchers.deliver(&ratios);
    }

    /// Number of live intersection watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    fn notify(&self) {
        let ratios = self.visible_ratios();
        self.watchers.observe(&ratios);
    }
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::standard()
    }
}

impl Document for HeadlessDocument {
    fn color_scheme(&self) -> ColorMode {
        self.color_scheme.get()
    }

    fn section_ids(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.is_section)
            .map(|e| e.id.clone())
            .collect()
    }

    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(top) = self.element(id).map(|e| e.top) else {
            return false;
        };
        let height = self.height();
        let offset = {
            let mut viewport = self.viewport.borrow_mut();
            viewport.scroll_to(top, height);
            viewport.scroll_top
        };
        self.scrolls.borrow_mut().push(ScrollRequest {
            target: id.to_string(),
            behavior,
            offset,
        });
        tracing::trace!(target_id = id, offset, "scrolled into view");
        self.notify();
        true
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut classes = self.root_classes.borrow_mut();
        let position = classes.iter().position(|c| c == class);
        match (present, position) {
            (true, None) => classes.push(class.to_string()),
            (false, Some(index)) => {
                classes.remove(index);
            }
            _ => {}
        }
    }

    fn root_classes(&self) -> Vec<String> {
        self.root_classes.borrow().clone()
    }

    fn observe_intersections(
        &self,
        targets: &[String],
        threshold: f64,
        callback: IntersectionCallback,
    ) -> Subscription {
        let watcher = IntersectionWatcher::new(targets.to_vec(), threshold, callback);
        let subscription = self.watchers.register(watcher);
        // A new watcher reports its targets' current state once.
        self.watchers
            .observe_one(&subscription, &self.visible_ratios());
        subscription
    }
}

/// Lays out a [`HeadlessDocument`] top to bottom.
#[derive(Debug, Clone)]
pub struct HeadlessDocumentBuilder {
    elements: Vec<Element>,
    viewport_height: f64,
    color_scheme: Option<ColorMode>,
}

impl Default for HeadlessDocumentBuilder {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            viewport_height: 800.0,
            color_scheme: None,
        }
    }
}

impl HeadlessDocumentBuilder {
    /// The page layout: three sections and a footer in an 800px viewport.
    pub fn standard() -> Self {
        Self::default()
            .viewport_height(800.0)
            .section("about", 900.0)
            .section("projects", 1400.0)
            .section("contact", 900.0)
            .element("footer", 56.0)
    }

    pub fn viewport_height(mut self, height: f64) -> Self {
        self.viewport_height = height;
        self
    }

    /// Appends an element carrying a section identifier.
    pub fn section(self, id: impl Into<String>, height: f64) -> Self {
        self.push(id.into(), height, true)
    }

    /// Appends a plain element.
    pub fn element(self, id: impl Into<String>, height: f64) -> Self {
        self.push(id.into(), height, false)
    }

    /// Fixes the environment preference instead of querying the OS.
    pub fn color_scheme(mut self, mode: ColorMode) -> Self {
        self.color_scheme = Some(mode);
        self
    }

    pub fn build(self) -> HeadlessDocument {
        HeadlessDocument {
            elements: self.elements,
            viewport: RefCell::new(Viewport::new(self.viewport_height)),
            color_scheme: Cell::new(self.color_scheme.unwrap_or_else(detect_color_mode)),
            root_classes: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
            watchers: WatcherSet::new(),
        }
    }

    fn push(mut self, id: String, height: f64, is_section: bool) -> Self {
        let top = self.elements.last().map(Element::bottom).unwrap_or(0.0);
        self.elements.push(Element {
            id,
            is_section,
            top,
            height: height.max(0.0),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::IntersectionEntry;
    use std::rc::Rc;

    fn document() -> HeadlessDocument {
        HeadlessDocumentBuilder::standard()
            .color_scheme(ColorMode::Light)
            .build()
    }

    fn recorder() -> (IntersectionCallback, Rc<RefCell<Vec<IntersectionEntry>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback: IntersectionCallback = Box::new(move |entries: &[IntersectionEntry]| {
            sink.borrow_mut().extend_from_slice(entries)
        });
        (callback, seen)
    }

    #[test]
    fn test_sections_stack_in_order() {
        let doc = document();
        assert_eq!(doc.section_ids(), vec!["about", "projects", "contact"]);
        assert_eq!(doc.element("projects").unwrap().top, 900.0);
        assert_eq!(doc.element("contact").unwrap().top, 2300.0);
        assert_eq!(doc.height(), 3256.0);
        assert!(doc.contains("footer"));
    }

    #[test]
    fn test_scroll_into_view_records_request() {
        let doc = document();
        assert!(doc.scroll_into_view("projects", ScrollBehavior::Smooth));
        assert_eq!(doc.scroll_top(), 900.0);
        assert_eq!(
            doc.scroll_requests(),
            vec![ScrollRequest {
                target: "projects".into(),
                behavior: ScrollBehavior::Smooth,
                offset: 900.0,
            }]
        );
    }

    #[test]
    fn test_scroll_into_view_clamps_at_bottom() {
        let doc = document();
        assert!(doc.scroll_into_view("footer", ScrollBehavior::Instant));
        assert_eq!(doc.scroll_top(), doc.height() - 800.0);
    }

    #[test]
    fn test_scroll_into_view_unknown_id() {
        let doc = document();
        assert!(!doc.scroll_into_view("blog", ScrollBehavior::Smooth));
        assert!(doc.scroll_requests().is_empty());
        assert_eq!(doc.scroll_top(), 0.0);
    }

    #[test]
    fn test_root_class_set_semantics() {
        let doc = document();
        doc.set_root_class("dark", true);
        doc.set_root_class("dark", true);
        assert_eq!(doc.root_classes(), vec!["dark"]);
        assert!(doc.root_has_class("dark"));
        doc.set_root_class("dark", false);
        assert!(doc.root_classes().is_empty());
        doc.set_root_class("dark", false);
        assert!(!doc.root_has_class("dark"));
    }

    #[test]
    fn test_new_watcher_reports_current_state() {
        let doc = document();
        let (callback, seen) = recorder();
        let targets = doc.section_ids();
        let _sub = doc.observe_intersections(&targets, 0.5, callback);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].target, "about");
        // 800 of 900px visible.
        assert!(seen[0].is_intersecting);
        assert!(!seen[1].is_intersecting);
        assert!(!seen[2].is_intersecting);
    }

    #[test]
    fn test_scrolling_reports_crossings() {
        let doc = document();
        let (callback, seen) = recorder();
        let targets = doc.section_ids();
        let _sub = doc.observe_intersections(&targets, 0.5, callback);
        seen.borrow_mut().clear();

        doc.scroll_to(900.0);
        let seen = seen.borrow();
        let changed: Vec<_> = seen
            .iter()
            .map(|e| (e.target.as_str(), e.is_intersecting))
            .collect();
        // about: 0px visible; projects: 800/1400 visible.
        assert_eq!(changed, vec![("about", false), ("projects", true)]);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let doc = document();
        let (callback, seen) = recorder();
        let sub = doc.observe_intersections(&doc.section_ids(), 0.5, callback);
        assert_eq!(doc.watcher_count(), 1);
        drop(sub);
        assert_eq!(doc.watcher_count(), 0);

        seen.borrow_mut().clear();
        doc.scroll_to(2000.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_color_scheme_can_change() {
        let doc = document();
        assert_eq!(doc.color_scheme(), ColorMode::Light);
        doc.set_color_scheme(ColorMode::Dark);
        assert_eq!(doc.color_scheme(), ColorMode::Dark);
    }
}
