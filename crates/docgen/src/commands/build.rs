//! Documentation build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docgen_render::{RendererConfig, RendererKind};
use docgen_static::{BuildConfig, StaticBuilder};
use serde::Deserialize;

/// Configuration file structure (docgen.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    docs: DocsConfig,
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    renderer: RendererConfig,
}

#[derive(Debug, Deserialize)]
struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    dir: String,
    #[serde(default = "default_output")]
    output: String,
    /// Markup extension; the renderer's default when unset
    extension: Option<String>,
    /// Back links climb to the root index from nested pages
    #[serde(default)]
    relative_back_links: bool,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_description")]
    description: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            output: default_output(),
            extension: None,
            relative_back_links: false,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
        }
    }
}

fn default_docs_dir() -> String {
    ".".to_string()
}
fn default_output() -> String {
    "html".to_string()
}
fn default_title() -> String {
    "mcc".to_string()
}
fn default_description() -> String {
    "The official mocha compiler documentation.".to_string()
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub output: Option<String>,
    pub renderer: Option<RendererKind>,
    pub extension: Option<String>,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Merge the config file with command-line overrides.
fn resolve(file: ConfigFile, overrides: Overrides) -> (BuildConfig, RendererConfig) {
    let mut renderer = file.renderer;
    if let Some(kind) = overrides.renderer {
        renderer.kind = kind;
    }

    let config = BuildConfig {
        root: overrides
            .root
            .unwrap_or_else(|| PathBuf::from(&file.docs.dir)),
        output: overrides.output.unwrap_or(file.docs.output),
        extension: overrides.extension.or(file.docs.extension),
        title: file.site.title,
        description: file.site.description,
        relative_back_links: file.docs.relative_back_links,
    };

    (config, renderer)
}

/// Run the build command.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    let file_config = load_config(config_path)?;
    let (config, renderer) = resolve(file_config, overrides);

    tracing::info!("Building documentation in {}...", config.root.display());

    let result = StaticBuilder::new(config, renderer.build())
        .build()
        .context("Documentation build failed")?;

    tracing::info!(
        "Built {} pages in {}ms",
        result.pages,
        result.duration_ms
    );

    tracing::info!("Index: {}", result.index_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = tempdir().unwrap();
        let file = load_config(&temp.path().join("docgen.toml")).unwrap();

        let (config, renderer) = resolve(file, Overrides::default());

        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output, "html");
        assert_eq!(config.extension, None);
        assert_eq!(config.title, "mcc");
        assert!(!config.relative_back_links);
        assert_eq!(renderer.kind, RendererKind::Docutils);
        assert_eq!(renderer.program, "rst2html");
    }

    #[test]
    fn reads_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docgen.toml");
        fs::write(
            &path,
            r#"
[docs]
dir = "doc"
output = "public"
extension = "txt"
relative_back_links = true

[site]
title = "Mocha"

[renderer]
kind = "markdown"
"#,
        )
        .unwrap();

        let (config, renderer) = resolve(load_config(&path).unwrap(), Overrides::default());

        assert_eq!(config.root, PathBuf::from("doc"));
        assert_eq!(config.output, "public");
        assert_eq!(config.extension.as_deref(), Some("txt"));
        assert!(config.relative_back_links);
        assert_eq!(config.title, "Mocha");
        assert_eq!(
            config.description,
            "The official mocha compiler documentation."
        );
        assert_eq!(renderer.kind, RendererKind::Markdown);
    }

    #[test]
    fn overrides_take_precedence() {
        let file = ConfigFile::default();
        let overrides = Overrides {
            root: Some(PathBuf::from("docs")),
            output: Some("out".to_string()),
            renderer: Some(RendererKind::Markdown),
            extension: Some("markdown".to_string()),
        };

        let (config, renderer) = resolve(file, overrides);

        assert_eq!(config.root, PathBuf::from("docs"));
        assert_eq!(config.output, "out");
        assert_eq!(config.extension.as_deref(), Some("markdown"));
        assert_eq!(renderer.kind, RendererKind::Markdown);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docgen.toml");
        fs::write(&path, "[docs\ndir = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn runs_markdown_build() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("doc");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("intro.md"), "# Intro\n").unwrap();

        let overrides = Overrides {
            root: Some(root.clone()),
            renderer: Some(RendererKind::Markdown),
            ..Default::default()
        };
        run(&temp.path().join("docgen.toml"), overrides).unwrap();

        assert!(root.join("html/intro.html").is_file());
        let index = fs::read_to_string(root.join("index.html")).unwrap();
        assert!(index.contains("<a href=\"html/intro.html\">intro.md</a><br>"));
    }
}
