//! Static site output.
//!
//! A build mounts the page on the standard headless layout, renders it once,
//! and writes `index.html` plus a copy of the asset directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{FolioConfig, ModePreference};
use crate::error::{FolioError, Result};
use crate::host::HeadlessDocumentBuilder;
use crate::section::SectionId;
use crate::shell::PageShell;

/// File name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub assets_copied: usize,
}

/// Renders the configured page.
///
/// `active` scrolls the page to a section before rendering, the same way a
/// click on its navigation indicator would.
pub fn render_page(
    config: &FolioConfig,
    mode: ModePreference,
    active: Option<SectionId>,
) -> Result<String> {
    let shell = PageShell::new(config.site_content(), config.page_renderer()?);

    let mut layout = HeadlessDocumentBuilder::standard();
    if let Some(mode) = mode.fixed() {
        layout = layout.color_scheme(mode);
    }
    let document = layout.build();

    let page = shell.mount(&document);
    if let Some(section) = active {
        page.scroll_to_section(section.as_str());
    }
    page.render()
}

/// Renders the page into `out_dir` and copies the configured assets.
pub fn build_site(config: &FolioConfig, mode: ModePreference, out_dir: &Path) -> Result<BuildReport> {
    let html = render_page(config, mode, None)?;

    fs::create_dir_all(out_dir).map_err(|e| FolioError::io(out_dir, e))?;
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, html).map_err(|e| FolioError::io(&index, e))?;

    let assets_copied = match &config.assets {
        Some(assets) => copy_dir(assets, &out_dir.join("assets"))?,
        None => 0,
    };

    tracing::info!(index = %index.display(), assets_copied, "site built");
    Ok(BuildReport {
        index,
        assets_copied,
    })
}

/// Recursively copies `src` into `dst`, returning the number of files copied.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst).map_err(|e| FolioError::io(dst, e))?;
    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(|e| FolioError::io(src, e))? {
        let entry = entry.map_err(|e| FolioError::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| FolioError::io(&from, e))?;
        if file_type.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| FolioError::io(&from, e))?;
            tracing::trace!(from = %from.display(), "copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}
