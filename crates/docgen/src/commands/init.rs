//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'docgen build' to generate the documentation.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# docgen configuration

[docs]
# Source tree; index.html is written here
dir = "."

# Output directory for generated pages, relative to dir
output = "html"

# Markup extension (defaults to the renderer's: rst or md)
# extension = "rst"

# Nested pages link back with "../../index.html" etc. instead of the fixed
# "../index.html"
relative_back_links = false

[site]
title = "mcc"
description = "The official mocha compiler documentation."

[renderer]
# "docutils" runs an external program, "markdown" renders in-process
kind = "docutils"

# docutils front end, invoked as: program [args..] <source> <dest>
program = "rst2html"
args = []
"#;
