//! Recursive source discovery.

use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::builder::BuildError;

/// List every file under `root`, as `/`-separated paths relative to `root`.
///
/// Symlinks are followed. The order is whatever the file system yields;
/// callers sort. Any walk error aborts the listing.
pub fn list_files(root: &Path) -> Result<Vec<String>, BuildError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).display().to_string();
            BuildError::WalkError(format!("{}: {}", path, e))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        files.push(to_slash_path(relative)?);
    }

    Ok(files)
}

/// Join the normal components of a relative path with `/`.
fn to_slash_path(path: &Path) -> Result<String, BuildError> {
    let mut parts = Vec::new();

    for component in path.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| BuildError::NonUtf8Path(path.display().to_string()))?;
            parts.push(part);
        }
    }

    Ok(parts.join("/"))
}
