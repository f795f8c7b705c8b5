//! Markup-to-HTML renderers for docgen.
//!
//! Each renderer turns one source document into one standalone HTML file.
//! The docutils renderer shells out to an external program; the Markdown
//! renderer runs in-process with pulldown-cmark.

pub mod config;
pub mod docutils;
pub mod markdown;
pub mod traits;

pub use config::{RendererConfig, RendererKind};
pub use docutils::DocutilsRenderer;
pub use markdown::MarkdownRenderer;
pub use traits::{RenderError, Renderer};
