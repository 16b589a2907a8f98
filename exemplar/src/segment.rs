use std::fmt;

/// What a segment holds: prose to be rendered as Markdown, or code shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Documentation,
    Code,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Documentation => write!(f, "docs"),
            SegmentKind::Code => write!(f, "code"),
        }
    }
}

/// A maximal run of same-kind, blank-line-delimited lines from one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Newline-joined lines. Documentation text has its comment marker stripped.
    pub text: String,
    /// Markdown rendering of documentation text. Empty until rendered,
    /// and always empty for code segments.
    pub html: String,
    /// True when the segment carries no code.
    pub empty: bool,
    /// True for every segment except the last one of its file.
    pub leading: bool,
    /// True when the code contains the runnable-program marker.
    pub runnable: bool,
}

impl Segment {
    pub fn new(kind: SegmentKind, first_line: impl Into<String>) -> Self {
        Segment {
            kind,
            text: first_line.into(),
            html: String::new(),
            empty: kind != SegmentKind::Code,
            leading: false,
            runnable: false,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    pub fn is_docs(&self) -> bool {
        self.kind == SegmentKind::Documentation
    }

    pub fn is_code(&self) -> bool {
        self.kind == SegmentKind::Code
    }

    /// Documentation text, or "" for code segments.
    pub fn docs(&self) -> &str {
        if self.is_docs() { &self.text } else { "" }
    }

    /// Code text, or "" for documentation segments.
    pub fn code(&self) -> &str {
        if self.is_code() { &self.text } else { "" }
    }
}
