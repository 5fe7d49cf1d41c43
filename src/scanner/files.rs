// src/scanner/files.rs
// =============================================================================
// This module enumerates the markdown files under the scanned root.
//
// We use the `walkdir` crate which:
// - Recurses into subdirectories for us
// - Surfaces unreadable directories as errors instead of skipping them
// - Makes no promise about traversal order (and neither do we)
// =============================================================================

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Extensions we recognize as markdown, compared case-insensitively
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

// Collects the paths of all markdown files under `root`
//
// Parameters:
//   root: directory to scan (files directly in it count too)
//
// Returns: Result<Vec<PathBuf>>
//   Success: every markdown file found, in no particular order
//   Error: a directory or entry could not be read - that aborts the walk,
//          we don't silently skip parts of the tree
pub fn markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_markdown_extension(entry.path()) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

// Helper to test whether a path carries a recognized markdown extension
fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
