use std::fmt;
use std::path::Path;

use tracing::info;

use exemplar::Segment;

use crate::catalog::{Catalog, Entry};
use crate::collector::Example;
use crate::config::SiteConfig;
use crate::error::SiteError;

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

struct Head<'a> {
    title: &'a str,
}

impl fmt::Display for Head<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "  <head>")?;
        writeln!(f, "    <meta charset=\"utf-8\">")?;
        writeln!(f, "    <title>{}</title>", escape_html(self.title))?;
        writeln!(f, "    <link rel=stylesheet href=\"site.css\">")?;
        writeln!(f, "    <link rel=\"shortcut icon\" href=\"favicon.ico\">")?;
        writeln!(f, "  </head>")
    }
}

struct Footer<'a> {
    footer: Option<&'a str>,
}

impl fmt::Display for Footer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(footer) = self.footer {
            writeln!(f, "      <p class=\"footer\">{}</p>", footer)?;
        }
        Ok(())
    }
}

fn example_label(example: &Example) -> String {
    match &example.alt_name {
        Some(alt) => format!(
            "{} <span class=\"alt\">{}</span>",
            escape_html(&example.name),
            escape_html(alt)
        ),
        None => escape_html(&example.name),
    }
}

/// The `index.html` page: every example, in catalog order.
pub struct IndexPage<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
}

impl fmt::Display for IndexPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Head { title: &self.config.title })?;
        writeln!(f, "  <body>")?;
        writeln!(f, "    <div id=\"intro\">")?;
        writeln!(f, "      <h2><a href=\"./\">{}</a></h2>", escape_html(&self.config.title))?;
        writeln!(f, "      <ul>")?;
        for example in self.catalog.examples() {
            writeln!(
                f,
                "        <li><a href=\"{}\">{}</a></li>",
                escape_html(&example.page_name()),
                example_label(example)
            )?;
        }
        writeln!(f, "      </ul>")?;
        write!(f, "{}", Footer { footer: self.config.footer.as_deref() })?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </body>")?;
        writeln!(f, "</html>")
    }
}

/// One example's page.
pub struct ExamplePage<'a> {
    pub config: &'a SiteConfig,
    pub entry: Entry<'a>,
}

impl ExamplePage<'_> {
    fn segment_row(f: &mut fmt::Formatter<'_>, segment: &Segment) -> fmt::Result {
        let mut code_class = String::from("code");
        if segment.empty {
            code_class.push_str(" empty");
        }
        if segment.leading {
            code_class.push_str(" leading");
        }

        writeln!(f, "        <tr>")?;
        writeln!(f, "          <td class=\"docs\">")?;
        if !segment.html.is_empty() {
            write!(f, "{}", segment.html)?;
        }
        writeln!(f, "          </td>")?;
        writeln!(f, "          <td class=\"{}\">", code_class)?;
        if segment.runnable && segment.leading {
            writeln!(f, "            <img title=\"Run code\" src=\"play.png\" class=\"run\" />")?;
        }
        if segment.runnable {
            writeln!(f, "            <img title=\"Copy code\" src=\"clipboard.png\" class=\"copy\" />")?;
        }
        if !segment.empty {
            writeln!(f, "<pre><code>{}</code></pre>", escape_html(segment.code()))?;
        }
        writeln!(f, "          </td>")?;
        writeln!(f, "        </tr>")
    }
}

impl fmt::Display for ExamplePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let example = self.entry.example;
        let title = format!("{}: {}", self.config.title, example.preferred_name());
        write!(f, "{}", Head { title: &title })?;
        writeln!(f, "  <body>")?;
        writeln!(f, "    <div class=\"example\" id=\"{}\">", escape_html(&example.slug))?;
        writeln!(
            f,
            "      <h2><a href=\"./\">{}</a>: {}</h2>",
            escape_html(&self.config.title),
            example_label(example)
        )?;
        for segments in example.segments() {
            writeln!(f, "      <table>")?;
            for segment in segments {
                ExamplePage::segment_row(f, segment)?;
            }
            writeln!(f, "      </table>")?;
        }
        if let Some(next) = self.entry.next {
            writeln!(
                f,
                "      <p class=\"next\">Next example: <a href=\"{}\">{}</a>.</p>",
                escape_html(&next.page_name()),
                escape_html(next.preferred_name())
            )?;
        }
        if let Some(previous) = self.entry.previous {
            writeln!(
                f,
                "      <p class=\"previous\">Previous example: <a href=\"{}\">{}</a>.</p>",
                escape_html(&previous.page_name()),
                escape_html(previous.preferred_name())
            )?;
        }
        write!(f, "{}", Footer { footer: self.config.footer.as_deref() })?;
        writeln!(f, "    </div>")?;
        writeln!(
            f,
            "    <textarea id=\"source\" hidden readonly>{}</textarea>",
            escape_html(&example.source)
        )?;
        writeln!(f, "    <script src=\"site.js\" async></script>")?;
        writeln!(f, "  </body>")?;
        writeln!(f, "</html>")
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), SiteError> {
    std::fs::write(path, contents).map_err(|e| SiteError::io(path, e))
}

pub fn ensure_output_dir(config: &SiteConfig) -> Result<(), SiteError> {
    std::fs::create_dir_all(&config.output_dir).map_err(|e| SiteError::io(&config.output_dir, e))
}

/// Copy each configured asset byte-for-byte into the output directory.
pub fn copy_assets(config: &SiteConfig) -> Result<(), SiteError> {
    for asset in &config.assets {
        let src = config.templates_dir.join(asset);
        let dst = config.output_dir.join(asset);
        let bytes = std::fs::read(&src).map_err(|e| SiteError::io(&src, e))?;
        std::fs::write(&dst, bytes).map_err(|e| SiteError::io(&dst, e))?;
    }
    Ok(())
}

pub fn render_index(config: &SiteConfig, catalog: &Catalog) -> Result<(), SiteError> {
    info!("rendering index");
    let page = IndexPage { config, catalog };
    write_file(&config.output_dir.join("index.html"), &page.to_string())
}

pub fn render_examples(config: &SiteConfig, catalog: &Catalog) -> Result<(), SiteError> {
    info!("rendering examples");
    for entry in catalog.entries() {
        let path = config.output_dir.join(entry.example.page_name());
        let page = ExamplePage { config, entry };
        write_file(&path, &page.to_string())?;
    }
    Ok(())
}

/// Write the whole site: output directory, assets, index, example pages.
pub fn emit(config: &SiteConfig, catalog: &Catalog) -> Result<(), SiteError> {
    ensure_output_dir(config)?;
    copy_assets(config)?;
    render_index(config, catalog)?;
    render_examples(config, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::SourceFile;
    use exemplar::Segmenter;

    fn example(slug: &str, source: &str) -> Example {
        let mut segments = Segmenter::default().segment(source);
        exemplar::render::render_segments(&mut segments);
        Example {
            slug: slug.to_string(),
            name: slug.to_string(),
            alt_name: None,
            files: vec![SourceFile {
                path: format!("{slug}/{slug}.go").into(),
                segments,
            }],
            source: source.to_string(),
        }
    }

    #[test]
    fn escapes() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn index_lists_examples() {
        let mut first = example("hello", "// hi");
        first.alt_name = Some("你好".to_string());
        let catalog = Catalog::new(vec![first, example("values", "x := 1")]);
        let config = SiteConfig::default();
        let html = IndexPage { config: &config, catalog: &catalog }.to_string();
        assert!(html.contains("<a href=\"hello.html\">hello <span class=\"alt\">你好</span></a>"));
        assert!(html.contains("<a href=\"values.html\">values</a>"));
        assert!(html.find("hello.html").unwrap() < html.find("values.html").unwrap());
    }

    #[test]
    fn example_page_segments_and_links() {
        let catalog = Catalog::new(vec![
            example("a", "// first"),
            example("b", "// Prints `1`.\n\npackage main\n\nfunc main() { println(1 < 2) }"),
            example("c", "// last"),
        ]);
        let config = SiteConfig::default();
        let html = ExamplePage {
            config: &config,
            entry: catalog.entry(1).unwrap(),
        }
        .to_string();
        assert!(html.contains("<p>Prints <code>1</code>.</p>"));
        assert!(html.contains("<pre><code>package main</code></pre>"));
        assert!(html.contains("println(1 &lt; 2)"));
        assert_eq!(html.matches("class=\"run\"").count(), 1);
        assert!(html.contains("Next example: <a href=\"c.html\">c</a>."));
        assert!(html.contains("Previous example: <a href=\"a.html\">a</a>."));
    }

    #[test]
    fn first_page_has_no_previous() {
        let catalog = Catalog::new(vec![example("a", "// only")]);
        let config = SiteConfig::default();
        let html = ExamplePage {
            config: &config,
            entry: catalog.entry(0).unwrap(),
        }
        .to_string();
        assert!(!html.contains("Previous example"));
        assert!(!html.contains("Next example"));
    }
}
