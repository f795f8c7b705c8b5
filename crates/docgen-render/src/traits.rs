//! Trait definitions for markup renderers.

use std::path::Path;

/// Errors that can occur while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A markup-to-HTML renderer.
///
/// The build pipeline treats renderers as black boxes: given a source file,
/// write a complete HTML document to the destination path.
pub trait Renderer: Send + Sync {
    /// Renderer identifier (e.g., "docutils", "markdown")
    fn name(&self) -> &'static str;

    /// Default source file extension, without the leading dot
    fn extension(&self) -> &'static str;

    /// Render `source` into an HTML file at `dest`, overwriting it.
    fn render(&self, source: &Path, dest: &Path) -> Result<(), RenderError>;
}
