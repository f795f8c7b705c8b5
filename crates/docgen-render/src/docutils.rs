//! reStructuredText rendering through the docutils command-line front end.

use std::path::Path;
use std::process::Command;

use crate::traits::{RenderError, Renderer};

/// Default docutils front end.
pub const DEFAULT_PROGRAM: &str = "rst2html";

/// Renders reStructuredText by running an external docutils program as
/// `program [args..] <source> <dest>`.
#[derive(Debug, Clone)]
pub struct DocutilsRenderer {
    program: String,
    args: Vec<String>,
}

impl DocutilsRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, source: &Path, dest: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(source).arg(dest);
        cmd
    }
}

impl Default for DocutilsRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, Vec::new())
    }
}

impl Renderer for DocutilsRenderer {
    fn name(&self) -> &'static str {
        "docutils"
    }

    fn extension(&self) -> &'static str {
        "rst"
    }

    fn render(&self, source: &Path, dest: &Path) -> Result<(), RenderError> {
        tracing::debug!(
            "Running {} {} -> {}",
            self.program,
            source.display(),
            dest.display()
        );

        let output = self
            .command(source, dest)
            .output()
            .map_err(|e| RenderError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}
