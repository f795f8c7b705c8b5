//! Post-processing of rendered HTML pages.
//!
//! Renderers emit complete documents; docgen only splices text into them:
//! the site theme after the inline style tag, and a link back to the index
//! after the document title.

use std::sync::LazyLock;

use regex::Regex;

/// Opening tag of the inline style sheet emitted by the renderers.
pub const STYLE_TAG: &str = r#"<style type="text/css">"#;

/// Theme appended to every page's inline style sheet.
pub const PAGE_CSS: &str = r#"
body {
    background-color: #181825;
    margin: 0;
}

.document {
    width: 50%;
    padding: 20px;
    margin: auto;
    margin-top: 0;
    margin-bottom: 0;
    background-color: #1e1e2e;
    color: #cdd6f4;
    box-shadow: 5px 5px 10px #11111b;
}

.section {
    margin-top: 2em;
}

.section h1 {
    font-family: monospace !important;
    font-size: 1.5em !important;
    text-decoration: underline dotted #7f849c;
}

a {
    font-family: monospace;
    color: #89dceb;
    text-decoration: underline #9399b2;
}

a:visited {
    color: #89dceb;
    text-decoration: underline #9399b2;
}

a:hover {
    color: #b4befe;
    text-decoration: underline dotted #9399b2;
}
"#;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // `.` stops at newlines, so this only matches a title on a single line
    Regex::new(r#"<h1 class="title">.*</h1>"#).expect("Invalid title regex")
});

/// Append the theme after every occurrence of the inline style tag.
pub fn inject_style(html: &str) -> String {
    html.replace(STYLE_TAG, &format!("{}{}", STYLE_TAG, PAGE_CSS))
}

/// Anchor pointing from a page back to the index.
///
/// `depth` is the number of `../` steps in the href. Depth 1 gives the fixed
/// `../index.html` link; the builder only passes the real nesting depth when
/// relative back links are enabled.
pub fn back_link(depth: usize) -> String {
    format!(
        r#"<a href="{}index.html">&lt;&lt;&lt; Back</a>"#,
        "../".repeat(depth)
    )
}

/// Append `link` after the document title.
///
/// The first title match is taken and every occurrence of that exact text
/// gets the link. Pages without a title are returned unchanged.
pub fn inject_back_link(html: &str, link: &str) -> String {
    match TITLE_RE.find(html) {
        Some(found) => {
            let title = found.as_str();
            html.replace(title, &format!("{}{}", title, link))
        }
        None => {
            tracing::debug!("No title heading found, skipping back link");
            html.to_string()
        }
    }
}

/// Apply all page rewrites.
pub fn post_process(html: &str, depth: usize) -> String {
    let styled = inject_style(html);
    inject_back_link(&styled, &back_link(depth))
}
