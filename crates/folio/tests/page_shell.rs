//! Behavior of a mounted page against the headless host.

use folio::{
    Document, FixedClock, HeadlessDocument, HeadlessDocumentBuilder, PageShell,
    ScrollBehavior, SectionId, DARK_CLASS,
};
use folio_render::{set_theme_detector, ColorMode};
use serial_test::serial;

fn document(mode: ColorMode) -> HeadlessDocument {
    HeadlessDocumentBuilder::standard().color_scheme(mode).build()
}

fn shell() -> PageShell {
    PageShell::builtin().unwrap().with_clock(FixedClock(1999))
}

#[test]
fn test_initial_state_follows_host_preference() {
    let shell = shell();

    let dark = document(ColorMode::Dark);
    let page = shell.mount(&dark);
    assert_eq!(page.theme(), ColorMode::Dark);
    assert!(dark.root_has_class(DARK_CLASS));
    drop(page);

    let light = document(ColorMode::Light);
    let page = shell.mount(&light);
    assert_eq!(page.theme(), ColorMode::Light);
    assert!(!light.root_has_class(DARK_CLASS));
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
fn test_toggle_twice_restores_root_marker() {
    let shell = shell();
    for mode in [ColorMode::Light, ColorMode::Dark] {
        let doc = document(mode);
        let mut page = shell.mount(&doc);
        let before = doc.root_has_class(DARK_CLASS);

        page.toggle_theme();
        assert_ne!(doc.root_has_class(DARK_CLASS), before);
        page.toggle_theme();

        assert_eq!(doc.root_has_class(DARK_CLASS), before);
        assert_eq!(page.theme(), mode);
    }
}

#[test]
fn test_scroll_to_each_section() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let page = shell.mount(&doc);

    for section in SectionId::ALL {
        page.scroll_to_section(section.as_str());
        let last = doc.scroll_requests().pop().unwrap();
        assert_eq!(last.target, section.as_str());
        assert_eq!(last.behavior, ScrollBehavior::Smooth);
        assert_eq!(page.active_section(), section);
    }
}

#[test]
fn test_scroll_to_unknown_section_changes_nothing() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let page = shell.mount(&doc);
    page.scroll_to_section("projects");
    let requests = doc.scroll_requests().len();

    page.scroll_to_section("testimonials");
    assert_eq!(doc.scroll_requests().len(), requests);
    assert_eq!(page.active_section(), SectionId::Projects);
}

#[test]
fn test_visibility_threshold_sets_active_section() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let page = shell.mount(&doc);

    doc.deliver_intersections(&[("projects", 0.6)]);
    assert_eq!(page.active_section(), SectionId::Projects);

    // Below the threshold: no change.
    doc.deliver_intersections(&[("about", 0.3)]);
    assert_eq!(page.active_section(), SectionId::Projects);

    doc.deliver_intersections(&[("about", 0.6)]);
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
fn test_event_below_threshold_leaves_initial_section() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let page = shell.mount(&doc);

    doc.deliver_intersections(&[("contact", 0.3)]);
    assert_eq!(page.active_section(), SectionId::About);

    doc.deliver_intersections(&[("projects", 0.49), ("contact", 0.0)]);
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
fn test_last_intersecting_entry_in_batch_wins() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let page = shell.mount(&doc);

    doc.deliver_intersections(&[("contact", 0.9), ("projects", 0.7), ("about", 0.1)]);
    assert_eq!(page.active_section(), SectionId::Projects);
}

#[test]
fn test_user_scrolling_moves_indicator() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let page = shell.mount(&doc);

    doc.scroll_to(1000.0);
    assert_eq!(page.active_section(), SectionId::Projects);
    doc.scroll_to(0.0);
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
fn test_unmount_disconnects_and_remount_registers_once() {
    let shell = shell();
    let doc = document(ColorMode::Light);

    let page = shell.mount(&doc);
    assert_eq!(doc.watcher_count(), 1);
    page.unmount();
    assert_eq!(doc.watcher_count(), 0);

    // Entries after unmount reach nobody.
    doc.deliver_intersections(&[("contact", 1.0)]);

    let page = shell.mount(&doc);
    assert_eq!(doc.watcher_count(), 1);
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
fn test_rendered_page_reflects_state() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let mut page = shell.mount(&doc);
    page.scroll_to_section("contact");
    page.toggle_theme();

    let html = page.render().unwrap();
    assert!(html.contains(r#"<html lang="en" class="dark">"#));
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(r##"href="#contact" data-section="contact""##));
    assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
}

#[test]
fn test_projects_render_in_order_as_external_links() {
    let shell = shell();
    let doc = document(ColorMode::Light);
    let html = shell.mount(&doc).render().unwrap();

    let links = [
        "https://social-wave-a0v0.onrender.com/",
        "https://blogging-web-black.vercel.app/signin",
        "https://convo-sphere.onrender.com/",
    ];
    let positions: Vec<usize> = links
        .iter()
        .map(|link| html.find(&format!(r#"<a href="{link}" target="_blank" rel="noopener noreferrer""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("data-project=").count(), 3);
    assert!(html.contains(r#"data-project="the-writing-way""#));
    assert!(html.contains(r#"alt="Convo-Sphere""#));
}

#[test]
fn test_footer_year_appears_once() {
    let shell = shell();
    let doc = document(ColorMode::Dark);
    let html = shell.mount(&doc).render().unwrap();
    assert_eq!(html.matches("1999").count(), 1);
    assert!(html.contains("&copy; 1999 Vivek Raj. All rights reserved."));
}

#[test]
fn test_copyright_line() {
    insta::assert_snapshot!(shell().footer().copyright(), @"© 1999 Vivek Raj. All rights reserved.");
}

#[test]
fn test_custom_layout_without_contact_section() {
    let doc = HeadlessDocument::builder()
        .section("about", 600.0)
        .section("projects", 600.0)
        .color_scheme(ColorMode::Light)
        .build();
    let shell = shell();
    let page = shell.mount(&doc);

    page.scroll_to_section("contact");
    assert!(doc.scroll_requests().is_empty());
    assert_eq!(page.active_section(), SectionId::About);
}

#[test]
#[serial]
fn test_default_layout_reads_environment_preference() {
    set_theme_detector(|| ColorMode::Dark);
    let doc = HeadlessDocument::standard();
    set_theme_detector(|| ColorMode::Light);

    let shell = shell();
    let page = shell.mount(&doc);
    assert_eq!(page.theme(), ColorMode::Dark);
    assert!(doc.root_has_class(DARK_CLASS));
}
