use pulldown_cmark::{Options, Parser as CmarkParser, html};

use crate::segment::Segment;

/// Render Markdown to an HTML fragment.
pub fn markdown(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = CmarkParser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Fill in `html` for every segment with non-empty documentation.
pub fn render_segments(segments: &mut [Segment]) {
    for segment in segments.iter_mut() {
        let docs = segment.docs();
        if !docs.is_empty() {
            segment.html = markdown(docs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::Segmenter;

    #[test]
    fn paragraph() {
        assert_eq!(markdown("hello *world*"), "<p>hello <em>world</em></p>\n");
    }

    #[test]
    fn inline_code_and_links() {
        let html = markdown("see [`fmt`](https://pkg.go.dev/fmt)");
        assert!(html.contains("<a href=\"https://pkg.go.dev/fmt\"><code>fmt</code></a>"));
    }

    #[test]
    fn strikethrough_enabled() {
        assert!(markdown("~~old~~").contains("<del>old</del>"));
    }

    #[test]
    fn only_docs_are_rendered() {
        let mut segs = Segmenter::default().segment("// `x` is one\n\nx := 1");
        render_segments(&mut segs);
        assert_eq!(segs[0].html, "<p><code>x</code> is one</p>\n");
        assert!(segs[1].html.is_empty());
    }
}
