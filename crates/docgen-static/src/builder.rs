//! Documentation site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use docgen_render::Renderer;

use crate::page;
use crate::templates::{IndexContext, Link, TemplateEngine};
use crate::walker::list_files;

/// Index file written at the root of the tree.
pub const INDEX_FILE: &str = "index.html";

/// Configuration for building the documentation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source tree root; the index is written here
    pub root: PathBuf,

    /// Output directory, relative to the root
    pub output: String,

    /// Markup extension without the dot (defaults to the renderer's)
    pub extension: Option<String>,

    /// Site title shown on the index
    pub title: String,

    /// Site description shown on the index
    pub description: String,

    /// Point nested pages' back links at the root index instead of the
    /// fixed `../index.html`
    pub relative_back_links: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: "html".to_string(),
            extension: None,
            title: "mcc".to_string(),
            description: "The official mocha compiler documentation.".to_string(),
            relative_back_links: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Index links, in conversion order
    pub links: Vec<Link>,

    /// Path of the written index
    pub index_path: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read source tree: {0}")]
    WalkError(String),

    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to render {path}: {source}")]
    RenderError {
        path: String,
        #[source]
        source: docgen_render::RenderError,
    },

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Walks a source tree, converts every markup document and writes the index.
pub struct StaticBuilder {
    config: BuildConfig,
    renderer: Box<dyn Renderer>,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new builder around a renderer.
    pub fn new(config: BuildConfig, renderer: Box<dyn Renderer>) -> Self {
        Self {
            config,
            renderer,
            templates: TemplateEngine::new(),
        }
    }

    /// Markup extension handled by this build.
    pub fn extension(&self) -> &str {
        self.config
            .extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .unwrap_or_else(|| self.renderer.extension())
    }

    /// Output directory as it appears in walked paths: no leading `./`,
    /// no trailing `/`.
    fn output_prefix(&self) -> &str {
        let mut output = self.config.output.trim_end_matches('/');
        while let Some(rest) = output.strip_prefix("./") {
            output = rest.trim_start_matches('/');
        }
        output
    }

    fn validate_output(&self) -> Result<(), BuildError> {
        let output = self.output_prefix();

        if output.is_empty() || output == "." {
            return Err(BuildError::ConfigError(
                "output directory must not be empty".to_string(),
            ));
        }

        if output.starts_with('/') || Path::new(output).is_absolute() {
            return Err(BuildError::ConfigError(format!(
                "output directory must be relative to the root: {}",
                self.config.output
            )));
        }

        if output.split('/').any(|part| part == "..") {
            return Err(BuildError::ConfigError(format!(
                "output directory must stay inside the root: {}",
                self.config.output
            )));
        }

        Ok(())
    }

    /// Build all pages and the index.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        self.validate_output()?;

        tracing::debug!(
            "Building {} with the {} renderer (*.{})",
            self.config.root.display(),
            self.renderer.name(),
            self.extension()
        );

        let mut files = list_files(&self.config.root)?;
        files.sort();

        let mut links = Vec::new();
        for doc in &files {
            if let Some(link) = self.convert_page(doc)? {
                links.push(link);
            }
        }

        let index_path = self.write_index(&links)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: links.len(),
            links,
            index_path,
            duration_ms: duration.as_millis() as u64,
        })
    }

    /// Strip the markup extension from a document path.
    ///
    /// Returns `None` for files that are not documents or that sit under the
    /// output directory. The output check is a plain string prefix test, so
    /// `htmlnotes.rst` is skipped as well when the output is `html`.
    pub fn document_basename<'a>(&self, doc: &'a str) -> Option<&'a str> {
        let basename = doc.strip_suffix(&format!(".{}", self.extension()))?;

        if doc.starts_with(self.output_prefix()) {
            tracing::debug!("Skipping {} (inside output directory)", doc);
            return None;
        }

        Some(basename)
    }

    /// Convert one document, returning its index link.
    fn convert_page(&self, doc: &str) -> Result<Option<Link>, BuildError> {
        let Some(basename) = self.document_basename(doc) else {
            return Ok(None);
        };

        let href = format!("{}/{}.html", self.output_prefix(), basename);
        let source = self.config.root.join(doc);
        let dest = self.config.root.join(&href);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BuildError::WriteError(format!("{}: {}", parent.display(), e)))?;
        }

        tracing::info!("Generating {}", href);

        self.renderer
            .render(&source, &dest)
            .map_err(|e| BuildError::RenderError {
                path: doc.to_string(),
                source: e,
            })?;

        let html = fs::read_to_string(&dest).map_err(|e| BuildError::ReadError {
            path: dest.display().to_string(),
            message: e.to_string(),
        })?;

        let depth = if self.config.relative_back_links {
            href.matches('/').count()
        } else {
            1
        };
        let html = page::post_process(&html, depth);

        fs::write(&dest, html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", dest.display(), e)))?;

        Ok(Some(Link {
            text: doc.to_string(),
            href,
        }))
    }

    /// Write the index page listing every link.
    fn write_index(&self, links: &[Link]) -> Result<PathBuf, BuildError> {
        let context = IndexContext {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            extension: self.extension().to_string(),
            links: links.to_vec(),
        };

        let html = self
            .templates
            .render_index(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let index_path = self.config.root.join(INDEX_FILE);
        fs::write(&index_path, html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", index_path.display(), e)))?;

        Ok(index_path)
    }
}
