// src/resolver/paths.rs
// =============================================================================
// This module is the boundary between logical paths and host paths.
//
// Markdown links are always written with forward slashes, no matter what
// operating system the documentation is checked on. Before any filesystem
// query, the logical path gets rewritten into the host's native form so
// existence checks behave the same everywhere.
// =============================================================================

use std::path::PathBuf;

// Converts a forward-slash logical path into the host's native representation
//
// On Unix-like systems this is the identity conversion. On Windows the
// forward slashes become backslashes so the resulting PathBuf matches what
// the native filesystem APIs expect.
pub fn to_native(logical: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(logical.replace('/', "\\"))
    } else {
        PathBuf::from(logical)
    }
}
