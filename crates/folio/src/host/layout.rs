//! Vertical layout geometry for the headless document.

/// An element with a vertical extent, in CSS pixels from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    /// True for elements carrying a section identifier.
    pub is_section: bool,
    pub top: f64,
    pub height: f64,
}

impl Element {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub scroll_top: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            scroll_top: 0.0,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }

    /// Fraction of `element` inside the viewport, `0.0..=1.0`.
    ///
    /// Zero-height elements are never visible.
    pub fn visible_ratio(&self, element: &Element) -> f64 {
        if element.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.bottom().min(element.bottom()) - self.scroll_top.max(element.top);
        (overlap.max(0.0) / element.height).min(1.0)
    }

    /// Moves the viewport, keeping it inside a document of `document_height`.
    pub fn scroll_to(&mut self, offset: f64, document_height: f64) {
        let max = (document_height - self.height).max(0.0);
        self.scroll_top = offset.clamp(0.0, max);
    }
}
