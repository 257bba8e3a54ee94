//! Discovery of template files on disk.
//!
//! A template directory is walked recursively. Every file with a recognized
//! extension becomes a [`TemplateFile`] named by its path relative to the
//! root, with forward slashes and the template extension removed:
//!
//! ```text
//! templates/page.html.jinja      -> "page.html"
//! templates/partials/nav.html.j2 -> "partials/nav.html"
//! templates/footer.html          -> "footer.html"
//! ```

use std::path::{Path, PathBuf};

/// Recognized template extensions, in priority order.
///
/// `.html` files are loaded verbatim under their full name.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".jinja", ".jinja2", ".j2", ".html"];

/// A template file found by [`walk_template_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Resolution name (e.g., "page.html" or "partials/nav.html")
    pub name: String,
    /// Path to the template file
    pub absolute_path: PathBuf,
}

impl TemplateFile {
    /// Builds a descriptor from a path relative to the template root.
    ///
    /// Returns `None` when the file has no recognized extension.
    pub fn from_relative(root: &Path, relative: &Path) -> Option<Self> {
        let rel = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let ext = TEMPLATE_EXTENSIONS.iter().find(|ext| rel.ends_with(*ext))?;
        let name = if *ext == ".html" {
            rel.clone()
        } else {
            rel[..rel.len() - ext.len()].to_string()
        };

        Some(Self {
            name,
            absolute_path: root.join(relative),
        })
    }

    /// Position of this file's extension in [`TEMPLATE_EXTENSIONS`].
    pub fn extension_priority(&self) -> usize {
        let path = self.absolute_path.to_string_lossy();
        TEMPLATE_EXTENSIONS
            .iter()
            .position(|ext| path.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// Walks a template directory and returns every template file found.
///
/// When two files resolve to the same name (e.g. `page.html` and
/// `page.html.jinja`), the one with the higher-priority extension wins.
/// Results are sorted by name.
pub fn walk_template_dir(root: impl AsRef<Path>) -> Result<Vec<TemplateFile>, std::io::Error> {
    let root = root.as_ref();
    let mut found: Vec<TemplateFile> = Vec::new();
    walk(root, Path::new(""), &mut found)?;

    found.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then(a.extension_priority().cmp(&b.extension_priority()))
    });
    found.dedup_by(|later, earlier| later.name == earlier.name);
    Ok(found)
}

fn walk(root: &Path, relative: &Path, found: &mut Vec<TemplateFile>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(root.join(relative))? {
        let entry = entry?;
        let rel = relative.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            walk(root, &rel, found)?;
        } else if let Some(file) = TemplateFile::from_relative(root, &rel) {
            found.push(file);
        }
    }
    Ok(())
}
