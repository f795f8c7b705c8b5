//! Index page template.

use minijinja::{AutoEscape, Environment};

/// A link from the index to a generated page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    /// Source document path, shown as the link text
    pub text: String,
    /// Generated page path relative to the root
    pub href: String,
}

/// Context for rendering the index template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    /// Site title
    pub title: String,
    /// One-line site description
    pub description: String,
    /// Markup extension the pages were generated from
    pub extension: String,
    /// Links in conversion order
    pub links: Vec<Link>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the index template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Link text is emitted verbatim
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render the index page.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const INDEX_TEMPLATE: &str = r##"
<html>
    <head>
        <title>{{ title }} documentation</title>
        <style>

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

        body {
            background-color: #181825;
            margin: 0;
        }

        .document {
            width: 50%;
            margin: auto;
            padding: 20px;
            background-color: #1e1e2e;
            color: #cdd6f4;
            box-shadow: 5px 5px 10px #11111b;
        }

        </style>
    </head>
    <body>
    <div class="document">
        <h1>{{ title }}</h1>
        <p>
            {{ description }}
        </p>
        <hr>
        <p>
            Here is the list of all generated HTML pages from the .{{ extension }} files:
        </p>
{% for link in links %}<a href="{{ link.href }}">{{ link.text }}</a><br>
{% endfor %}    </div>
    </body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context(links: Vec<Link>) -> IndexContext {
        IndexContext {
            title: "mcc".to_string(),
            description: "The official mocha compiler documentation.".to_string(),
            extension: "rst".to_string(),
            links,
        }
    }

    #[test]
    fn renders_link_markup_verbatim() {
        let html = TemplateEngine::new()
            .render_index(&context(vec![Link {
                text: "docs/intro.rst".to_string(),
                href: "html/docs/intro.html".to_string(),
            }]))
            .unwrap();

        assert!(html.contains("\n<a href=\"html/docs/intro.html\">docs/intro.rst</a><br>\n"));
    }

    #[test]
    fn names_source_extension() {
        let mut ctx = context(vec![]);
        let html = TemplateEngine::new().render_index(&ctx).unwrap();
        assert!(html.contains("Here is the list of all generated HTML pages from the .rst files:"));

        ctx.extension = "md".to_string();
        let html = TemplateEngine::new().render_index(&ctx).unwrap();
        assert!(html.contains("generated HTML pages from the .md files:"));
    }

    #[test]
    fn renders_links_one_per_line_in_order() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_index(&context(vec![
                Link {
                    text: "a.rst".to_string(),
                    href: "html/a.html".to_string(),
                },
                Link {
                    text: "b/c.rst".to_string(),
                    href: "html/b/c.html".to_string(),
                },
            ]))
            .unwrap();

        assert!(html.contains(
            "\n<a href=\"html/a.html\">a.rst</a><br>\n<a href=\"html/b/c.html\">b/c.rst</a><br>\n    </div>"
        ));
    }

    #[test]
    fn renders_title_and_description() {
        let html = TemplateEngine::new().render_index(&context(vec![])).unwrap();

        assert!(html.contains("<title>mcc documentation</title>"));
        assert!(html.contains("<h1>mcc</h1>"));
        assert!(html.contains("The official mocha compiler documentation."));
        assert!(html.contains("background-color: #1e1e2e;"));
    }

    #[test]
    fn empty_index_has_no_links() {
        let html = TemplateEngine::new().render_index(&context(vec![])).unwrap();

        assert!(!html.contains("<a "));
        assert_eq!(html.matches("<br>").count(), 0);
        assert!(html.ends_with("</html>\n"));
    }
}
