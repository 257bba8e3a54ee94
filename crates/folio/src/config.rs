//! Site configuration.
//!
//! Configuration is read from an optional YAML file, `folio.yaml` by default:
//!
//! ```yaml
//! mode: dark              # auto | light | dark
//! theme: theme.yaml       # styles layered over the built-in theme
//! templates: templates/   # overrides for built-in templates
//! assets: assets/         # copied into the output directory
//! output: dist
//! content:
//!   projects:
//!     - title: Demo
//!       description: A demo project.
//!       link: https://example.com/
//!       image: assets/demo.png
//! ```
//!
//! Relative paths are resolved against the directory holding the file.
//! Content sections that are left out keep the built-in content.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use folio_render::ColorMode;
use serde::{Deserialize, Serialize};

use crate::content::{Profile, ProjectEntry, SiteContent, SocialLinks};
use crate::error::{FolioError, Result};
use crate::page::PageRenderer;

/// File name looked up by [`FolioConfig::discover`].
pub const CONFIG_FILE: &str = "folio.yaml";

/// Which color scheme to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    /// Follow the environment preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ModePreference {
    /// The forced mode, or `None` to follow the environment.
    pub fn fixed(self) -> Option<ColorMode> {
        match self {
            ModePreference::Auto => None,
            ModePreference::Light => Some(ColorMode::Light),
            ModePreference::Dark => Some(ColorMode::Dark),
        }
    }
}

/// Replacements for parts of the built-in content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentOverrides {
    pub profile: Option<Profile>,
    pub links: Option<SocialLinks>,
    pub projects: Option<Vec<ProjectEntry>>,
}

impl ContentOverrides {
    /// Replaces each part of `base` that has an override.
    pub fn apply(&self, mut base: SiteContent) -> SiteContent {
        if let Some(profile) = &self.profile {
            base.profile = profile.clone();
        }
        if let Some(links) = &self.links {
            base.links = links.clone();
        }
        if let Some(projects) = &self.projects {
            base.projects = projects.clone();
        }
        base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub mode: ModePreference,
    /// Stylesheet layered over the built-in theme.
    pub theme: Option<PathBuf>,
    /// Directory of template overrides.
    pub templates: Option<PathBuf>,
    /// Directory copied into the build output.
    pub assets: Option<PathBuf>,
    pub output: PathBuf,
    pub content: ContentOverrides,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            mode: ModePreference::Auto,
            theme: None,
            templates: None,
            assets: None,
            output: PathBuf::from("dist"),
            content: ContentOverrides::default(),
        }
    }
}

impl FolioConfig {
    /// Reads a config file, resolving its relative paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&text).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses a config document. An empty document is the default config.
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Looks for [`CONFIG_FILE`] in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }

    /// Loads `explicit` if given, else a discovered file in `dir`, else defaults.
    pub fn load_or_default(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// The built-in content with this config's overrides applied.
    pub fn site_content(&self) -> SiteContent {
        self.content.apply(SiteContent::builtin())
    }

    /// A page renderer with this config's theme and templates.
    pub fn page_renderer(&self) -> Result<PageRenderer> {
        let mut renderer = match &self.theme {
            Some(path) => PageRenderer::with_theme_file(path)?,
            None => PageRenderer::new()?,
        };
        if let Some(dir) = &self.templates {
            let count = renderer.add_template_dir(dir)?;
            tracing::info!(dir = %dir.display(), count, "loaded template overrides");
        }
        Ok(renderer)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        if let Some(theme) = self.theme.as_mut() {
            resolve(theme);
        }
        if let Some(templates) = self.templates.as_mut() {
            resolve(templates);
        }
        if let Some(assets) = self.assets.as_mut() {
            resolve(assets);
        }
        resolve(&mut self.output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(FolioConfig::from_yaml("").unwrap(), FolioConfig::default());
        assert_eq!(FolioConfig::default().output, PathBuf::from("dist"));
    }

    #[test]
    fn test_mode_preference() {
        let config = FolioConfig::from_yaml("mode: dark").unwrap();
        assert_eq!(config.mode.fixed(), Some(ColorMode::Dark));
        assert_eq!(ModePreference::Auto.fixed(), None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(FolioConfig::from_yaml("colour: dark").is_err());
    }

    #[test]
    fn test_partial_content_override() {
        let config = FolioConfig::from_yaml(
            r#"
content:
  links:
    github: https://github.com/someone
    linkedin: https://www.linkedin.com/in/someone/
"#,
        )
        .unwrap();
        let content = config.site_content();
        assert_eq!(content.links.github, "https://github.com/someone");
        assert_eq!(content.profile.name, "Vivek Raj");
        assert_eq!(content.projects.len(), 3);
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "assets: static\noutput: /tmp/site\n").unwrap();

        let config = FolioConfig::load(&path).unwrap();
        assert_eq!(config.assets, Some(dir.path().join("static")));
        assert_eq!(config.output, PathBuf::from("/tmp/site"));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "mode: sepia\n").unwrap();

        let err = FolioConfig::load(&path).unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FolioConfig::load("/no/such/folio.yaml").unwrap_err();
        assert!(matches!(err, FolioError::ConfigRead { .. }));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FolioConfig::discover(dir.path()), None);
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        assert_eq!(
            FolioConfig::discover(dir.path()),
            Some(dir.path().join(CONFIG_FILE))
        );
        let config = FolioConfig::load_or_default(None, dir.path()).unwrap();
        assert_eq!(config.output, dir.path().join("dist"));
    }
}
