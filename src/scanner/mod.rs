// src/scanner/mod.rs
// =============================================================================
// This module finds the things to check: markdown files and the links
// inside them.
//
// Submodules:
// - files: walks the directory tree and yields markdown file paths
// - markdown: extracts link and image occurrences from file contents
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `scanner::find_links()` instead of
// `scanner::markdown::find_links()`.
// =============================================================================

mod files;
mod markdown;

pub use files::markdown_files;
pub use markdown::{find_links, LinkMatch};
