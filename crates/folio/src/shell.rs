//! The page shell: theme mode, active section, and their host bindings.
//!
//! A [`PageShell`] is the immutable page definition. Mounting it onto a
//! [`Document`] yields a [`MountedShell`], which owns the live state:
//!
//! - the theme mode, read once from the host at mount and then changed only
//!   by [`MountedShell::toggle_theme`];
//! - the active section, starting at [`SectionId::About`] and changed only by
//!   intersection callbacks.
//!
//! Dropping the mounted shell disconnects its intersection watcher.
//!
//! ```rust
//! use folio::{FixedClock, HeadlessDocument, PageShell, SectionId};
//! use folio_render::ColorMode;
//!
//! let document = HeadlessDocument::builder()
//!     .section("about", 900.0)
//!     .section("projects", 1400.0)
//!     .section("contact", 900.0)
//!     .color_scheme(ColorMode::Light)
//!     .build();
//! let shell = PageShell::builtin().unwrap().with_clock(FixedClock(2024));
//!
//! let mut page = shell.mount(&document);
//! page.scroll_to_section("projects");
//! assert_eq!(page.active_section(), SectionId::Projects);
//!
//! page.toggle_theme();
//! assert_eq!(page.theme(), ColorMode::Dark);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use folio_render::ColorMode;
use serde::Serialize;

use crate::content::SiteContent;
use crate::error::Result;
use crate::footer::{Clock, FooterView, SystemClock};
use crate::host::{Document, ScrollBehavior};
use crate::observer::{IntersectionEntry, Subscription};
use crate::page::{PageRenderer, PageView};
use crate::section::SectionId;

/// Visible fraction at which a section counts as in view.
pub const SECTION_THRESHOLD: f64 = 0.5;

/// Root class present while the page is dark.
pub const DARK_CLASS: &str = "dark";

/// The live state of a mounted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShellState {
    pub theme: ColorMode,
    pub active_section: SectionId,
}

impl ShellState {
    pub fn new(theme: ColorMode) -> Self {
        Self {
            theme,
            active_section: SectionId::default(),
        }
    }

    /// Applies one batch of intersection entries.
    ///
    /// Every intersecting entry naming a section becomes active in turn, so
    /// the last one wins. Other entries are ignored.
    pub fn apply_intersections(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            match entry.target.parse::<SectionId>() {
                Ok(section) => self.active_section = section,
                Err(_) => tracing::trace!(target_id = %entry.target, "ignoring non-section entry"),
            }
        }
    }
}

/// Mirrors the theme mode onto the document root.
///
/// The only place the root class is written.
#[derive(Debug, Default)]
struct ThemeSync {
    applied: Option<ColorMode>,
}

impl ThemeSync {
    fn apply<D: Document + ?Sized>(&mut self, document: &D, mode: ColorMode) {
        if self.applied == Some(mode) {
            return;
        }
        document.set_root_class(DARK_CLASS, mode.is_dark());
        self.applied = Some(mode);
        tracing::debug!(theme = %mode, "synced root theme class");
    }
}

/// The page definition: content, renderer and the clock for the footer.
pub struct PageShell {
    content: SiteContent,
    renderer: PageRenderer,
    clock: Box<dyn Clock>,
}

impl PageShell {
    pub fn new(content: SiteContent, renderer: PageRenderer) -> Self {
        Self {
            content,
            renderer,
            clock: Box::new(SystemClock),
        }
    }

    /// The built-in content with the built-in templates and theme.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(SiteContent::builtin(), PageRenderer::new()?))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    pub fn footer(&self) -> FooterView {
        FooterView::new(&self.content, self.clock.as_ref())
    }

    /// Mounts the page onto `document`.
    ///
    /// Reads the host color scheme, mirrors it onto the root element, and
    /// watches every section element for the active-section indicator.
    pub fn mount<'a, D: Document + ?Sized>(&'a self, document: &'a D) -> MountedShell<'a, D> {
        let state = Rc::new(RefCell::new(ShellState::new(document.color_scheme())));

        let mut sync = ThemeSync::default();
        sync.apply(document, state.borrow().theme);

        let weak = Rc::downgrade(&state);
        let targets = document.section_ids();
        let subscription = document.observe_intersections(
            &targets,
            SECTION_THRESHOLD,
            Box::new(move |entries: &[IntersectionEntry]| {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().apply_intersections(entries);
                }
            }),
        );

        tracing::debug!(
            theme = %state.borrow().theme,
            sections = targets.len(),
            "page mounted"
        );

        MountedShell {
            shell: self,
            document,
            state,
            sync,
            subscription,
        }
    }
}

impl fmt::Debug for PageShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageShell")
            .field("content", &self.content)
            .field("renderer", &self.renderer)
            .field("year", &self.clock.current_year())
            .finish()
    }
}

/// A page mounted onto a host document.
pub struct MountedShell<'a, D: Document + ?Sized> {
    shell: &'a PageShell,
    document: &'a D,
    state: Rc<RefCell<ShellState>>,
    sync: ThemeSync,
    subscription: Subscription,
}

impl<'a, D: Document + ?Sized> MountedShell<'a, D> {
    pub fn state(&self) -> ShellState {
        *self.state.borrow()
    }

    pub fn theme(&self) -> ColorMode {
        self.state.borrow().theme
    }

    pub fn active_section(&self) -> SectionId {
        self.state.borrow().active_section
    }

    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&mut self) {
        let theme = {
            let mut state = self.state.borrow_mut();
            state.theme = state.theme.toggled();
            state.theme
        };
        self.sync.apply(self.document, theme);
    }

    /// Smooth-scrolls the element with `id` into view.
    ///
    /// Unknown ids are ignored.
    pub fn scroll_to_section(&self, id: &str) {
        if !self.document.scroll_into_view(id, ScrollBehavior::Smooth) {
            tracing::debug!(section = id, "scroll target not mounted");
        }
    }

    /// Renders the page as it currently looks.
    pub fn render(&self) -> Result<String> {
        let state = self.state();
        let view = PageView::new(
            &self.shell.content,
            state.theme,
            state.active_section,
            self.document.root_classes(),
            self.shell.footer(),
        );
        self.shell.renderer.render_page(&view)
    }

    /// Disconnects from the document.
    pub fn unmount(self) {
        tracing::debug!("page unmounted");
    }
}

impl<'a, D: Document + ?Sized> fmt::Debug for MountedShell<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedShell")
            .field("state", &self.state())
            .field("subscription", &self.subscription)
            .finish()
    }
}
