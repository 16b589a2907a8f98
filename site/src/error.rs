use std::fmt;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use codespan_reporting::diagnostic::{Diagnostic, Label};

use exemplar::ManifestError;

/// Every way a generation run can fail. All of them abort the run.
#[derive(Debug)]
pub enum SiteError {
    /// Reading the manifest, a source file or an asset, or writing output.
    Io { path: PathBuf, source: io::Error },
    /// An example's file pattern could not be compiled.
    BadPattern {
        example: String,
        pattern: String,
        source: globset::Error,
        /// Span of the declaration in the manifest.
        span: Range<usize>,
    },
    Config { path: PathBuf, message: String },
    Manifest(Vec<ManifestError>),
}

impl SiteError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        SiteError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Diagnostics pointing into the manifest, when the error has a location there.
    pub fn diagnostics(&self, manifest_id: usize) -> Vec<Diagnostic<usize>> {
        match self {
            SiteError::Manifest(errors) => errors.iter().map(ManifestError::to_diagnostic).collect(),
            SiteError::BadPattern {
                example,
                pattern,
                source,
                span,
            } => vec![
                Diagnostic::error()
                    .with_message(format!("invalid file pattern for `{}`", example))
                    .with_labels(vec![
                        Label::primary(manifest_id, span.clone()).with_message(source.to_string()),
                    ])
                    .with_notes(vec![format!("pattern: {}", pattern)]),
            ],
            SiteError::Io { .. } | SiteError::Config { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SiteError::BadPattern {
                example, pattern, source, ..
            } => write!(
                f,
                "invalid file pattern '{}' for example '{}': {}",
                pattern, example, source
            ),
            SiteError::Config { path, message } => {
                write!(f, "invalid config {}: {}", path.display(), message)
            }
            SiteError::Manifest(errors) => {
                let count = errors.len();
                match errors.first() {
                    Some(first) if count == 1 => write!(f, "manifest error: {}", first),
                    Some(first) => write!(f, "{} manifest errors, first: {}", count, first),
                    None => write!(f, "manifest error"),
                }
            }
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Io { source, .. } => Some(source),
            SiteError::BadPattern { source, .. } => Some(source),
            SiteError::Config { .. } | SiteError::Manifest(_) => None,
        }
    }
}
