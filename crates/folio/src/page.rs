//! HTML rendering of the page.
//!
//! [`PageRenderer`] wraps a [`Renderer`] loaded with the built-in templates
//! and theme. [`PageView`] is the complete, serializable input of one render:
//! a snapshot of shell state plus the site content.

use std::path::Path;

use folio_render::{ColorMode, RenderContext, Renderer, StylesheetError, Theme};
use serde::Serialize;

use crate::content::{ContactField, Profile, ProjectEntry, SiteContent, SocialLinks, CONTACT_FIELDS};
use crate::error::Result;
use crate::footer::FooterView;
use crate::section::SectionId;

/// Name of the top-level page template.
pub const PAGE_TEMPLATE: &str = "page.html";
/// Name of the footer template.
pub const FOOTER_TEMPLATE: &str = "footer.html";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (PAGE_TEMPLATE, include_str!("../templates/page.html")),
    ("icons.html", include_str!("../templates/icons.html")),
    ("nav.html", include_str!("../templates/nav.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("projects.html", include_str!("../templates/projects.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    (FOOTER_TEMPLATE, include_str!("../templates/footer.html")),
];

const DEFAULT_THEME: &str = include_str!("../themes/default.yaml");

/// The theme compiled into the binary.
pub fn default_theme() -> std::result::Result<Theme, StylesheetError> {
    Ok(Theme::from_yaml(DEFAULT_THEME)?.with_name("default"))
}

/// One navigation indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub active: bool,
}

impl NavItem {
    /// Indicators for every section in navigation order.
    pub fn all(active: SectionId) -> Vec<NavItem> {
        SectionId::ALL
            .into_iter()
            .map(|id| NavItem {
                id,
                label: id.as_str(),
                active: id == active,
            })
            .collect()
    }
}

/// The data behind one page render.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub theme: ColorMode,
    pub active_section: SectionId,
    /// Classes on the document root when the page was rendered.
    pub root_classes: Vec<String>,
    pub nav: Vec<NavItem>,
    pub profile: &'a Profile,
    pub links: &'a SocialLinks,
    pub projects: &'a [ProjectEntry],
    pub contact_fields: &'static [ContactField],
    pub footer: FooterView,
}

impl<'a> PageView<'a> {
    pub fn new(
        content: &'a SiteContent,
        theme: ColorMode,
        active_section: SectionId,
        root_classes: Vec<String>,
        footer: FooterView,
    ) -> Self {
        Self {
            theme,
            active_section,
            root_classes,
            nav: NavItem::all(active_section),
            profile: &content.profile,
            links: &content.links,
            projects: &content.projects,
            contact_fields: &CONTACT_FIELDS,
            footer,
        }
    }
}

#[derive(Serialize)]
struct FooterData<'a> {
    footer: &'a FooterView,
}

/// Renders pages and footers with the site theme.
#[derive(Debug)]
pub struct PageRenderer {
    renderer: Renderer,
}

impl PageRenderer {
    /// A renderer with the built-in templates and theme.
    pub fn new() -> Result<Self> {
        Self::with_theme(default_theme()?)
    }

    /// A renderer with the built-in templates and `theme`.
    pub fn with_theme(theme: Theme) -> Result<Self> {
        let mut renderer = Renderer::new(theme)?;
        for (name, source) in BUILTIN_TEMPLATES {
            renderer.add_template(name, source)?;
        }
        renderer
            .context_mut()
            .add_provider("mode", |ctx: &RenderContext| {
                serde_json::Value::from(ctx.color_mode.as_str())
            });
        renderer
            .context_mut()
            .add_provider("is_dark", |ctx: &RenderContext| {
                serde_json::Value::Bool(ctx.color_mode.is_dark())
            });
        Ok(Self { renderer })
    }

    /// The default theme with the styles of the stylesheet at `path` layered on top.
    pub fn with_theme_file(path: impl AsRef<Path>) -> Result<Self> {
        let overrides = Theme::from_file(path)?;
        Self::with_theme(default_theme()?.merge(overrides))
    }

    /// Overrides built-in templates with the templates found under `path`.
    pub fn add_template_dir(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        Ok(self.renderer.add_template_dir(path)?)
    }

    pub fn theme(&self) -> &Theme {
        self.renderer.theme()
    }

    /// Renders the whole page in the view's color mode.
    pub fn render_page(&self, view: &PageView<'_>) -> Result<String> {
        tracing::debug!(
            theme = %view.theme,
            active = %view.active_section,
            "rendering page"
        );
        Ok(self.renderer.render_in(PAGE_TEMPLATE, view, view.theme)?)
    }

    /// Renders only the footer.
    pub fn render_footer(&self, footer: &FooterView, mode: ColorMode) -> Result<String> {
        Ok(self
            .renderer
            .render_in(FOOTER_TEMPLATE, &FooterData { footer }, mode)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footer::{FixedClock, FooterView};

    fn render(theme: ColorMode, active: SectionId) -> String {
        let content = SiteContent::builtin();
        let footer = FooterView::new(&content, &FixedClock(1999));
        let roots = if theme.is_dark() {
            vec!["dark".to_string()]
        } else {
            Vec::new()
        };
        let view = PageView::new(&content, theme, active, roots, footer);
        PageRenderer::new().unwrap().render_page(&view).unwrap()
    }

    #[test]
    fn test_default_theme_is_valid() {
        let theme = default_theme().unwrap();
        assert!(theme.validate().is_ok());
        assert_eq!(theme.name(), Some("default"));
    }

    #[test]
    fn test_nav_items_mark_one_active() {
        let items = NavItem::all(SectionId::Projects);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.id).collect();
        assert_eq!(active, vec![SectionId::Projects]);
        assert_eq!(items[0].label, "about");
    }

    #[test]
    fn test_active_indicator_on_active_section_only() {
        let html = render(ColorMode::Light, SectionId::Contact);
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
        assert_eq!(html.matches("data-indicator=").count(), 1);
        assert!(html.contains(r#"data-indicator="contact""#));
    }

    #[test]
    fn test_toggle_icon_follows_mode() {
        let sun = r#"<circle cx="12" cy="12" r="4"/>"#;
        let moon = r#"M12 3a6 6 0 0 0 9 9"#;

        let dark = render(ColorMode::Dark, SectionId::About);
        assert!(dark.contains(sun) && !dark.contains(moon));

        let light = render(ColorMode::Light, SectionId::About);
        assert!(light.contains(moon) && !light.contains(sun));
        assert!(light.contains(r#"aria-label="Toggle dark mode""#));
    }

    #[test]
    fn test_adaptive_classes_switch_with_mode() {
        let dark = render(ColorMode::Dark, SectionId::About);
        let light = render(ColorMode::Light, SectionId::About);
        assert!(dark.contains("from-gray-900 to-blue-900"));
        assert!(light.contains("from-gray-50 to-blue-50"));
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));
        assert!(light.contains(r#"<html lang="en" class="">"#));
    }

    #[test]
    fn test_contact_form_is_inert() {
        let html = render(ColorMode::Light, SectionId::About);
        let form_start = html.find("<form ").unwrap();
        let form_tag = &html[form_start..form_start + html[form_start..].find('>').unwrap()];
        assert!(form_tag.starts_with("<form class="));
        assert!(!form_tag.contains("action"));
        assert!(!form_tag.contains("onsubmit"));
        assert!(html.contains(r#"<textarea id="message" rows="6""#));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_resume_link_is_attribute_escaped() {
        let html = render(ColorMode::Light, SectionId::About);
        assert!(html.contains("uc?export=download&amp;id=1jEPLnu0Je6MvEM-xLk7z-hTg00_MNAGw"));
    }

    #[test]
    fn test_footer_alone() {
        let content = SiteContent::builtin();
        let footer = FooterView::new(&content, &FixedClock(2021));
        let html = PageRenderer::new()
            .unwrap()
            .render_footer(&footer, ColorMode::Light)
            .unwrap();
        assert!(html.contains("&copy; 2021 Vivek Raj. All rights reserved."));
        assert!(html.contains(r#"href="https://github.com/vivekraj2704""#));
        assert!(html.contains(r#"href="https://www.linkedin.com/in/vivek-raj-02448624b/""#));
    }

    #[test]
    fn test_theme_file_overrides_single_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "footer: \"bg-black text-white py-8\"\n").unwrap();

        let renderer = PageRenderer::with_theme_file(&path).unwrap();
        assert_eq!(
            renderer.theme().classes("footer", None).as_deref(),
            Some("bg-black text-white py-8")
        );
        assert!(renderer.theme().classes("nav", None).is_some());
    }
}
