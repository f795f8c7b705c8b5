//! Markdown rendering with pulldown-cmark.
//!
//! Output mimics the shape of a docutils HTML page so the same post-processing
//! applies: an inline `<style type="text/css">` block, a `div.document`
//! wrapper, and a leading level-1 heading promoted to `h1.title`.

use std::fs;
use std::path::Path;

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::traits::{RenderError, Renderer};

/// Renders CommonMark documents into standalone HTML pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render Markdown source into a complete HTML page.
    ///
    /// `fallback_title` is used for `<title>` when the document does not open
    /// with a level-1 heading.
    pub fn render_str(&self, source: &str, fallback_title: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;

        let events: Vec<Event<'_>> = Parser::new_ext(source, options).collect();
        let (title, body) = split_title(events);

        let (page_title, title_html) = match title {
            Some(inner) => {
                let text = plain_text(&inner);
                let mut heading = String::new();
                html::push_html(&mut heading, inner.into_iter());
                // h1.title must stay on a single line
                let heading = heading.replace('\n', " ");
                (text, format!("<h1 class=\"title\">{}</h1>\n", heading))
            }
            None => (fallback_title.to_string(), String::new()),
        };

        let mut body_html = String::new();
        html::push_html(&mut body_html, body.into_iter());

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<meta name="generator" content="docgen" />
<title>{title}</title>
<style type="text/css">
{css}
</style>
</head>
<body>
<div class="document">
{title_html}{body}</div>
</body>
</html>
"#,
            title = escape_html(&page_title),
            css = BASE_CSS,
            title_html = title_html,
            body = body_html,
        )
    }
}

impl Renderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, source: &Path, dest: &Path) -> Result<(), RenderError> {
        let content = fs::read_to_string(source).map_err(|e| RenderError::Io {
            path: source.display().to_string(),
            source: e,
        })?;

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled");

        let page = self.render_str(&content, stem);

        fs::write(dest, page).map_err(|e| RenderError::Io {
            path: dest.display().to_string(),
            source: e,
        })
    }
}

/// Split off the inner events of a leading level-1 heading.
fn split_title<'a>(mut events: Vec<Event<'a>>) -> (Option<Vec<Event<'a>>>, Vec<Event<'a>>) {
    let opens_with_title = matches!(
        events.first(),
        Some(Event::Start(Tag::Heading {
            level: HeadingLevel::H1,
            ..
        }))
    );
    if !opens_with_title {
        return (None, events);
    }

    let Some(end) = events
        .iter()
        .position(|e| matches!(e, Event::End(TagEnd::Heading(HeadingLevel::H1))))
    else {
        return (None, events);
    };

    let body = events.split_off(end + 1);
    events.pop();
    events.remove(0);

    (Some(events), body)
}

/// Concatenate the text content of inline events.
fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const BASE_CSS: &str = r#"body { font-family: sans-serif; line-height: 1.5; }
h1.title { text-align: center; }
pre { overflow: auto; padding: 0.5em; }
table { border-collapse: collapse; }
th, td { border: 1px solid #7f849c; padding: 0.25em 0.5em; }"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn promotes_leading_heading_to_title() {
        let page = MarkdownRenderer::new().render_str("# Getting Started\n\nHello.\n", "intro");

        assert!(page.contains("<title>Getting Started</title>"));
        assert!(page.contains("<h1 class=\"title\">Getting Started</h1>\n"));
        assert!(page.contains("<p>Hello.</p>"));
        assert_eq!(page.matches("<h1").count(), 1);
    }

    #[test]
    fn keeps_inline_markup_in_title() {
        let page = MarkdownRenderer::new().render_str("# The `mcc` driver\n", "driver");

        assert!(page.contains("<title>The mcc driver</title>"));
        assert!(page.contains("<h1 class=\"title\">The <code>mcc</code> driver</h1>"));
    }

    #[test]
    fn no_title_when_document_opens_with_text() {
        let page = MarkdownRenderer::new().render_str("Intro text.\n\n# Later\n", "notes");

        assert!(page.contains("<title>notes</title>"));
        assert!(!page.contains("class=\"title\""));
        assert!(page.contains("<h1>Later</h1>"));
    }

    #[test]
    fn second_level_heading_is_not_a_title() {
        let page = MarkdownRenderer::new().render_str("## Section\n", "doc");

        assert!(!page.contains("class=\"title\""));
        assert!(page.contains("<h2>Section</h2>"));
    }

    #[test]
    fn escapes_fallback_title() {
        let page = MarkdownRenderer::new().render_str("text", "a<b");

        assert!(page.contains("<title>a&lt;b</title>"));
    }

    #[test]
    fn emits_docutils_style_tag() {
        let page = MarkdownRenderer::new().render_str("", "empty");

        assert_eq!(page.matches("<style type=\"text/css\">").count(), 1);
        assert!(page.contains("<div class=\"document\">"));
    }

    #[test]
    fn renders_file_to_file() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("intro.md");
        let dest = temp.path().join("intro.html");
        fs::write(&source, "# Intro\n\n| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();

        MarkdownRenderer::new().render(&source, &dest).unwrap();

        let html = fs::read_to_string(&dest).unwrap();
        assert!(html.contains("<h1 class=\"title\">Intro</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let temp = tempfile::tempdir().unwrap();

        let result = MarkdownRenderer::new().render(
            &temp.path().join("missing.md"),
            &temp.path().join("missing.html"),
        );

        assert!(matches!(result, Err(RenderError::Io { .. })));
    }
}
