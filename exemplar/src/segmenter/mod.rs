mod strategy;

pub use strategy::{Classify, CommentSplit, DocsOnly, Line, Strategy};

use tracing::debug;

use crate::segment::{Segment, SegmentKind};

pub const DEFAULT_TAB_WIDTH: usize = 4;
pub const DEFAULT_RUNNABLE_MARKER: &str = "package main";

/// Splits one source file into documentation and code segments.
#[derive(Debug, Clone)]
pub struct Segmenter {
    strategy: Strategy,
    tab: String,
    runnable_marker: String,
}

impl Segmenter {
    pub fn new(strategy: Strategy) -> Self {
        Segmenter {
            strategy,
            tab: " ".repeat(DEFAULT_TAB_WIDTH),
            runnable_marker: DEFAULT_RUNNABLE_MARKER.to_string(),
        }
    }

    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab = " ".repeat(width);
        self
    }

    pub fn with_runnable_marker(mut self, marker: impl Into<String>) -> Self {
        self.runnable_marker = marker.into();
        self
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Segment the text of one file.
    ///
    /// A blank line closes the open segment, so the next non-blank line always
    /// starts a new one. Consecutive lines of the same kind are joined with
    /// `\n`. Tabs are expanded before classification.
    pub fn segment(&self, source: &str) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut open: Option<SegmentKind> = None;

        for raw in source.split('\n') {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let line = raw.replace('\t', &self.tab);
            if line.trim().is_empty() {
                open = None;
                continue;
            }

            let (kind, text) = match self.strategy.classify(&line) {
                Line::Docs(text) => (SegmentKind::Documentation, text),
                Line::Code(text) => (SegmentKind::Code, text),
            };

            match segments.last_mut() {
                Some(current) if open == Some(kind) => current.push_line(text),
                _ => {
                    debug!("new {} segment", kind);
                    segments.push(Segment::new(kind, text));
                }
            }
            debug!("{}: {}", kind, line);
            open = Some(kind);
        }

        self.annotate(&mut segments);
        segments
    }

    fn annotate(&self, segments: &mut [Segment]) {
        let count = segments.len();
        for (i, segment) in segments.iter_mut().enumerate() {
            segment.empty = segment.code().is_empty();
            segment.leading = i + 1 < count;
            segment.runnable =
                !self.runnable_marker.is_empty() && segment.code().contains(&self.runnable_marker);
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Segmenter::new(Strategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(segments: &[Segment]) -> Vec<(SegmentKind, &str)> {
        segments.iter().map(|s| (s.kind, s.text.as_str())).collect()
    }

    #[test]
    fn blank_lines_split_segments() {
        let segs = Segmenter::default().segment("// hello\n\nx := 1\ny := 2\n\n// bye");
        assert_eq!(
            kinds(&segs),
            vec![
                (SegmentKind::Documentation, "hello"),
                (SegmentKind::Code, "x := 1\ny := 2"),
                (SegmentKind::Documentation, "bye"),
            ]
        );
        assert!(segs[0].leading);
        assert!(segs[1].leading);
        assert!(!segs[2].leading);
    }

    #[test]
    fn same_kind_across_blank_line_is_two_segments() {
        let segs = Segmenter::default().segment("a := 1\n\nb := 2");
        assert_eq!(
            kinds(&segs),
            vec![(SegmentKind::Code, "a := 1"), (SegmentKind::Code, "b := 2")]
        );
    }

    #[test]
    fn kind_change_starts_segment() {
        let segs = Segmenter::default().segment("// one\nx := 1\n// two\n// three");
        assert_eq!(
            kinds(&segs),
            vec![
                (SegmentKind::Documentation, "one"),
                (SegmentKind::Code, "x := 1"),
                (SegmentKind::Documentation, "two\nthree"),
            ]
        );
    }

    #[test]
    fn only_blank_lines_yields_nothing() {
        assert!(Segmenter::default().segment("\n\n   \n\t\n").is_empty());
        assert!(Segmenter::default().segment("").is_empty());
    }

    #[test]
    fn tabs_become_spaces() {
        let segs = Segmenter::default().segment("func main() {\n\tfmt.Println(1)\n}");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "func main() {\n    fmt.Println(1)\n}");
    }

    #[test]
    fn tab_width_is_configurable() {
        let segs = Segmenter::default().with_tab_width(2).segment("\tx");
        assert_eq!(segs[0].text, "  x");
    }

    #[test]
    fn crlf_line_endings() {
        let segs = Segmenter::default().segment("// a\r\n\r\nb\r\n");
        assert_eq!(
            kinds(&segs),
            vec![(SegmentKind::Documentation, "a"), (SegmentKind::Code, "b")]
        );
    }

    #[test]
    fn annotations() {
        let segs = Segmenter::default().segment("// intro\n\npackage main\n\nfunc main() {}");
        assert!(segs[0].empty);
        assert!(!segs[0].runnable);
        assert!(!segs[1].empty);
        assert!(segs[1].runnable);
        assert!(!segs[2].runnable);
        assert!(!segs[2].leading);
    }

    #[test]
    fn custom_runnable_marker() {
        let segs = Segmenter::default()
            .with_runnable_marker("fn main")
            .segment("fn main() {}");
        assert!(segs[0].runnable);
    }

    #[test]
    fn docs_only_never_produces_code() {
        let docs_only = Strategy::DocsOnly(DocsOnly::default());
        let segs = Segmenter::new(docs_only).segment("# Title\nsome text\n\n    code-ish");
        assert_eq!(
            kinds(&segs),
            vec![
                (SegmentKind::Documentation, "Title\nsome text"),
                (SegmentKind::Documentation, "    code-ish"),
            ]
        );
        assert!(segs.iter().all(|s| s.empty && !s.runnable));
    }

    #[test]
    fn docs_only_strips_comment_markers() {
        let docs_only = Strategy::DocsOnly(DocsOnly::default());
        let segs = Segmenter::new(docs_only).segment("// hello\n# title\nplain");
        assert_eq!(
            kinds(&segs),
            vec![(SegmentKind::Documentation, "hello\ntitle\nplain")]
        );
    }
}
