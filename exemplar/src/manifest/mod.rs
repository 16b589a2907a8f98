//! The manifest lists which examples exist and in what order.
//!
//! One declaration per line. Blank lines and lines starting with `#` are
//! ignored. A declaration is either a bare name (`Hello World`) or a name and
//! a secondary display name separated by `|` (`Basic Types|基础类型`).

pub mod error;

pub use error::{ManifestError, ManifestProblem};

use std::collections::HashMap;
use std::ops::Range;

use crate::slug::slugify;

pub const DELIMITER: char = '|';

/// One declared example.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    /// URL-safe identifier derived from `name`.
    pub slug: String,
    /// Primary display name.
    pub name: String,
    /// Secondary display name, from the part after `|`.
    pub alt_name: Option<String>,
    /// Byte span of the declaration in the manifest.
    pub span: Range<usize>,
}

/// A parsed manifest, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    /// Non-fatal problems, such as two names sharing a slug.
    pub warnings: Vec<ManifestError>,
    pub file_id: usize,
}

impl Manifest {
    pub fn parse(source: &str, file_id: usize) -> Result<Manifest, Vec<ManifestError>> {
        let mut entries: Vec<ManifestEntry> = Vec::new();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut seen: HashMap<String, Range<usize>> = HashMap::new();

        let mut offset = 0;
        for raw in source.split('\n') {
            let start = offset;
            offset += raw.len() + 1;

            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let span = start..start + line.len();

            match parse_declaration(line, span.clone(), file_id) {
                Ok(entry) => {
                    if let Some(first) = seen.get(&entry.slug) {
                        let problem = ManifestProblem::DuplicateSlug {
                            name: entry.name.clone(),
                            slug: entry.slug.clone(),
                            first: first.clone(),
                        };
                        warnings.push(ManifestError::new(problem, span, file_id));
                    } else {
                        seen.insert(entry.slug.clone(), span);
                    }
                    entries.push(entry);
                }
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Manifest {
            entries,
            warnings,
            file_id,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_declaration(
    line: &str,
    span: Range<usize>,
    file_id: usize,
) -> Result<ManifestEntry, ManifestError> {
    let mut parts = line.split(DELIMITER);
    let name = parts.next().unwrap_or_default().trim();
    let alt_name = parts.next().map(str::trim).filter(|s| !s.is_empty());
    if parts.next().is_some() {
        return Err(ManifestError::new(ManifestProblem::ExtraDelimiter, span, file_id));
    }
    if name.is_empty() {
        return Err(ManifestError::new(ManifestProblem::MissingName, span, file_id));
    }

    let slug = slugify(name);
    if slug.is_empty() || slug == "-" {
        let problem = ManifestProblem::UnusableSlug {
            name: name.to_string(),
        };
        return Err(ManifestError::new(problem, span, file_id));
    }

    Ok(ManifestEntry {
        slug,
        name: name.to_string(),
        alt_name: alt_name.map(str::to_string),
        span,
    })
}
