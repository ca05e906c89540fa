//! Schema file discovery

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::DEFAULT_CONFIG_FILE;

const SCHEMA_EXTENSIONS: &[&str] = &["toml", "json"];

/// Expand input paths into schema files.
///
/// Files are taken as given. Directories are walked recursively and their
/// schema files returned in sorted order; a `jcegen.toml` found while walking
/// is skipped. Symlinked directories are not descended into, symlinked files
/// are kept. Repeated paths are kept once.
pub fn schema_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let found = walk(path)?;
            debug!(dir = %path.display(), count = found.len(), "discovered schemas");
            files.extend(found);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            anyhow::bail!("Input not found: {}", path.display());
        }
    }

    let mut seen = HashSet::new();
    files.retain(|f| seen.insert(f.clone()));

    Ok(files)
}

fn walk(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();

        if path.is_file() && is_schema_file(path) {
            found.push(path.to_path_buf());
        }
    }

    Ok(found)
}

fn is_schema_file(path: &Path) -> bool {
    if path.file_name().and_then(|n| n.to_str()) == Some(DEFAULT_CONFIG_FILE) {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SCHEMA_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
#[path = "discover/discover_tests.rs"]
mod discover_tests;
