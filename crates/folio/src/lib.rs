//! # folio
//!
//! A single-page portfolio: an about section, project cards, an inert contact
//! form and a footer, with a light/dark theme toggle and a navigation
//! indicator that follows scrolling.
//!
//! The page runs against a [`Document`], the host surface it reads the
//! color-scheme preference from, scrolls, marks with the `dark` root class
//! and watches for section visibility. [`HeadlessDocument`] is an in-memory
//! host with a simulated layout; the `folio` binary uses it to render static
//! HTML.
//!
//! ## Modules
//!
//! - [`shell`]: the mounted page state (theme mode, active section)
//! - [`page`]: HTML rendering through `folio-render`
//! - [`footer`]: the footer and its [`Clock`]
//! - [`host`]: the [`Document`] trait and [`HeadlessDocument`]
//! - [`observer`]: intersection watchers and their [`Subscription`]s
//! - [`config`]: the optional `folio.yaml`
//!
//! ## Example
//!
//! ```rust
//! use folio::{FixedClock, HeadlessDocument, PageShell};
//!
//! let document = HeadlessDocument::standard();
//! let shell = PageShell::builtin()?.with_clock(FixedClock(2024));
//! let page = shell.mount(&document);
//! let html = page.render()?;
//! assert!(html.contains("2024 Vivek Raj. All rights reserved."));
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod cli;
pub mod config;
pub mod content;
mod error;
pub mod footer;
pub mod host;
pub mod logging;
pub mod observer;
pub mod page;
pub mod section;
pub mod shell;
pub mod site;

pub use config::{ContentOverrides, FolioConfig, ModePreference};
pub use content::{ContactField, Profile, ProjectEntry, SiteContent, SocialLinks, CONTACT_FIELDS};
pub use error::{FolioError, Result};
pub use footer::{Clock, FixedClock, FooterView, SystemClock};
pub use host::{Document, HeadlessDocument, HeadlessDocumentBuilder, ScrollBehavior};
pub use observer::{IntersectionEntry, IntersectionWatcher, Subscription, WatcherSet};
pub use page::{NavItem, PageRenderer, PageView};
pub use section::{SectionId, UnknownSection};
pub use shell::{MountedShell, PageShell, ShellState, DARK_CLASS, SECTION_THRESHOLD};
pub use site::{build_site, render_page, BuildReport};
