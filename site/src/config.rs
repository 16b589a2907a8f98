use std::path::{Path, PathBuf};

use serde::Deserialize;

use exemplar::Segmenter;
use exemplar::segmenter::{DEFAULT_RUNNABLE_MARKER, DEFAULT_TAB_WIDTH, Strategy};

use crate::error::SiteError;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "exemplar.toml";

/// Everything a generation run needs to know, threaded explicitly through
/// collection and emission.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Manifest listing the examples in order.
    pub manifest: PathBuf,

    /// Directory holding one subdirectory per example slug.
    pub examples_dir: PathBuf,

    /// Directory the static assets are copied from.
    pub templates_dir: PathBuf,

    /// Directory the site is written into.
    pub output_dir: PathBuf,

    /// Pattern matched against file names inside each example directory.
    pub file_pattern: String,

    /// Line prefixes that mark documentation in code files.
    pub comment_markers: Vec<String>,

    /// Extensions of files that are prose throughout.
    pub markdown_extensions: Vec<String>,

    /// Code containing this is a standalone program.
    pub runnable_marker: String,

    pub tab_width: usize,

    /// Site title shown on every page.
    pub title: String,

    /// Optional HTML fragment placed at the bottom of every page.
    pub footer: Option<String>,

    /// Files under `templates_dir` copied verbatim into `output_dir`.
    pub assets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            manifest: PathBuf::from("examples.txt"),
            examples_dir: PathBuf::from("examples"),
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("./public"),
            file_pattern: "*".to_string(),
            comment_markers: vec!["//".to_string(), "#".to_string()],
            markdown_extensions: vec!["md".to_string()],
            runnable_marker: DEFAULT_RUNNABLE_MARKER.to_string(),
            tab_width: DEFAULT_TAB_WIDTH,
            title: "By Example".to_string(),
            footer: None,
            assets: [
                "site.css",
                "site.js",
                "favicon.ico",
                "404.html",
                "play.png",
                "clipboard.png",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load a config file. Relative paths inside it are resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let config = SiteConfig::from_toml(&source).map_err(|e| SiteError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.rooted_at(base))
    }

    /// Load `path` if given, else `exemplar.toml` if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SiteError> {
        match path {
            Some(path) => SiteConfig::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    SiteConfig::load(default)
                } else {
                    Ok(SiteConfig::default())
                }
            }
        }
    }

    /// Resolve every relative path against `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        for path in [
            &mut self.manifest,
            &mut self.examples_dir,
            &mut self.templates_dir,
            &mut self.output_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// The segmenter for one source file, picked by its extension.
    pub fn segmenter_for(&self, path: &Path) -> Segmenter {
        let strategy = Strategy::for_path(
            path,
            self.markdown_extensions.as_slice(),
            self.comment_markers.as_slice(),
        );
        Segmenter::new(strategy)
            .with_tab_width(self.tab_width)
            .with_runnable_marker(self.runnable_marker.as_str())
    }
}
