//! Renderer selection.

use serde::Deserialize;

use crate::docutils::{DocutilsRenderer, DEFAULT_PROGRAM};
use crate::markdown::MarkdownRenderer;
use crate::traits::Renderer;

/// Available renderer implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// reStructuredText through an external docutils program
    #[default]
    Docutils,
    /// CommonMark through pulldown-cmark
    Markdown,
}

/// Renderer settings (the `[renderer]` table of docgen.toml).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RendererConfig {
    #[serde(default)]
    pub kind: RendererKind,

    /// Program used by the docutils renderer
    #[serde(default = "default_program")]
    pub program: String,

    /// Extra arguments passed before the source and destination paths
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            kind: RendererKind::default(),
            program: default_program(),
            args: Vec::new(),
        }
    }
}

impl RendererConfig {
    /// Instantiate the configured renderer.
    pub fn build(&self) -> Box<dyn Renderer> {
        match self.kind {
            RendererKind::Docutils => {
                Box::new(DocutilsRenderer::new(self.program.clone(), self.args.clone()))
            }
            RendererKind::Markdown => Box::new(MarkdownRenderer::new()),
        }
    }
}
