use std::path::{Path, PathBuf};

use tracing::{debug, info};

use exemplar::render::render_segments;
use exemplar::{Manifest, ManifestEntry, Segment};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::discover::files_for_entry;
use crate::error::SiteError;

/// One source file of an example, already segmented and rendered.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub segments: Vec<Segment>,
}

/// One tutorial entry.
#[derive(Debug, Clone)]
pub struct Example {
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Secondary display name, from `name|secondary` in the manifest.
    pub alt_name: Option<String>,
    /// Per-file segments, in processing order.
    pub files: Vec<SourceFile>,
    /// Raw text of the last non-empty file processed.
    pub source: String,
}

impl Example {
    /// The secondary display name when the manifest gave one, else the
    /// display name. Used for page titles and prev/next links.
    pub fn preferred_name(&self) -> &str {
        self.alt_name.as_deref().unwrap_or(&self.name)
    }

    /// Output file name of this example's page.
    pub fn page_name(&self) -> String {
        format!("{}.html", self.slug)
    }

    pub fn segments(&self) -> impl Iterator<Item = &[Segment]> {
        self.files.iter().map(|f| f.segments.as_slice())
    }

    pub fn segment_count(&self) -> usize {
        self.files.iter().map(|f| f.segments.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Read, segment and render one source file. Returns the segments and the
/// file's raw text.
pub fn segment_file(config: &SiteConfig, path: &Path) -> Result<(Vec<Segment>, String), SiteError> {
    let source = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
    let mut segments = config.segmenter_for(path).segment(&source);
    render_segments(&mut segments);
    debug!("{}: {} segments", path.display(), segments.len());
    Ok((segments, source))
}

fn build_example(config: &SiteConfig, entry: &ManifestEntry) -> Result<Example, SiteError> {
    let mut example = Example {
        slug: entry.slug.clone(),
        name: entry.name.clone(),
        alt_name: entry.alt_name.clone(),
        files: Vec::new(),
        source: String::new(),
    };

    for path in files_for_entry(&config.examples_dir, entry, &config.file_pattern)? {
        let (segments, source) = segment_file(config, &path)?;
        if !source.is_empty() {
            example.source = source;
        }
        example.files.push(SourceFile { path, segments });
    }

    if example.is_empty() {
        debug!("no files for {}", entry.slug);
    }
    Ok(example)
}

/// Build every declared example, in manifest order, and link them.
pub fn collect(config: &SiteConfig, manifest: &Manifest) -> Result<Catalog, SiteError> {
    let total = manifest.len();
    let mut examples = Vec::with_capacity(total);
    for (i, entry) in manifest.entries.iter().enumerate() {
        info!("processing {} [{}/{}]", entry.name, i + 1, total);
        examples.push(build_example(config, entry)?);
    }
    Ok(Catalog::new(examples))
}
