//! Static HTML generation for docgen.
//!
//! Walks a source tree, renders every markup document into a mirrored output
//! directory, themes each page and writes an index linking to all of them.

pub mod builder;
pub mod page;
pub mod templates;
pub mod walker;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder, INDEX_FILE};
pub use templates::{IndexContext, Link, TemplateEngine};
