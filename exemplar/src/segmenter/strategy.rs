use std::path::Path;

/// A classified, non-blank source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Prose, with any comment marker already stripped.
    Docs(&'a str),
    Code(&'a str),
}

/// Decides whether a non-blank line is documentation or code.
pub trait Classify {
    fn classify<'a>(&self, line: &'a str) -> Line<'a>;
}

/// Splits code files into prose comments and code.
///
/// A line is documentation when it is optional whitespace, one of the
/// markers, then a whitespace character. Everything else is code, including
/// a bare marker with nothing after it.
#[derive(Debug, Clone)]
pub struct CommentSplit {
    markers: Vec<String>,
}

impl CommentSplit {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommentSplit {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    fn strip_marker<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.trim_start();
        self.markers.iter().find_map(|marker| {
            let after = rest.strip_prefix(marker.as_str())?;
            let mut chars = after.chars();
            match chars.next() {
                Some(c) if c.is_whitespace() => Some(chars.as_str()),
                _ => None,
            }
        })
    }
}

impl Default for CommentSplit {
    fn default() -> Self {
        CommentSplit::new(["//", "#"])
    }
}

impl Classify for CommentSplit {
    fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        match self.strip_marker(line) {
            Some(docs) => Line::Docs(docs),
            None => Line::Code(line),
        }
    }
}

/// Treats every line as documentation. Used for sources that are already prose.
///
/// A leading comment marker is still stripped, so `# Title` is stored as `Title`.
#[derive(Debug, Clone, Default)]
pub struct DocsOnly {
    markers: CommentSplit,
}

impl DocsOnly {
    pub fn new(markers: CommentSplit) -> Self {
        DocsOnly { markers }
    }
}

impl Classify for DocsOnly {
    fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        Line::Docs(self.markers.strip_marker(line).unwrap_or(line))
    }
}

/// Classification strategy selected per source file.
#[derive(Debug, Clone)]
pub enum Strategy {
    CommentSplit(CommentSplit),
    DocsOnly(DocsOnly),
}

impl Strategy {
    /// Pick `DocsOnly` for files whose extension is one of `prose_extensions`
    /// (case-insensitive), `CommentSplit` with `markers` otherwise.
    pub fn for_path<E, M>(path: &Path, prose_extensions: &[E], markers: &[M]) -> Self
    where
        E: AsRef<str>,
        M: AsRef<str>,
    {
        let is_prose = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                prose_extensions
                    .iter()
                    .any(|p| p.as_ref().eq_ignore_ascii_case(ext))
            });
        let split = CommentSplit::new(markers.iter().map(|m| m.as_ref()));
        if is_prose {
            Strategy::DocsOnly(DocsOnly::new(split))
        } else {
            Strategy::CommentSplit(split)
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::CommentSplit(CommentSplit::default())
    }
}

impl Classify for Strategy {
    fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        match self {
            Strategy::CommentSplit(split) => split.classify(line),
            Strategy::DocsOnly(docs) => docs.classify(line),
        }
    }
}
