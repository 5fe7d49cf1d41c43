// src/resolver/mod.rs
// =============================================================================
// This module contains the link target resolution logic.
//
// Given a markdown file and one raw link target from it, we decide whether
// the target points at something real on the filesystem:
// - http:// and https:// targets are skipped (no network checks here)
// - #anchor targets are skipped (they point into the same file)
// - everything else resolves relative to the file's directory and must
//   exist as the kind of entry the author asked for (file vs directory)
//
// Submodules:
// - paths: converts forward-slash paths into the host's native form
//
// Rust concepts:
// - Enums: To represent the fixed set of resolution outcomes
// - Pattern matching: To pick apart the target string
// - Path/PathBuf: Rust's owned and borrowed filesystem path types
// =============================================================================

mod paths;

pub use paths::to_native;

use std::path::Path;

// The outcome of resolving one link target
//
// There is deliberately more than one "broken" variant: a dangling trailing
// slash and a missing one are the two most common authoring mistakes in
// relative documentation links, and telling them apart gives the author an
// actionable hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Target exists and is the right kind of entry (or was skipped)
    Ok,
    /// Nothing exists at the resolved path
    DoesNotExist,
    /// Target ended with '/' but the path is not a directory
    NotADirectory,
    /// Target named a file but the path is not a regular file
    NotAFile,
}

impl Resolution {
    /// Helper method to check if the target resolved cleanly
    pub fn is_ok(&self) -> bool {
        matches!(self, Resolution::Ok)
    }

    /// Human-readable reason string, printed verbatim in diagnostics
    pub fn reason(&self) -> &'static str {
        match self {
            Resolution::Ok => "ok",
            Resolution::DoesNotExist => "doesn't exist",
            Resolution::NotADirectory => "not a directory",
            Resolution::NotAFile => "not a file",
        }
    }
}

// Resolves a single link target relative to the file that contains it
//
// Parameters:
//   containing_file: path of the markdown file the link was found in
//   target: the raw target string, exactly as written between the parens
//
// Returns: a Resolution - this function never fails and never panics;
// every input string maps to exactly one outcome.
//
// The target string always uses '/' separators (that's how markdown links
// are written), so separator normalization happens here, once, before any
// filesystem query.
pub fn resolve(containing_file: &Path, target: &str) -> Resolution {
    // External links are out of scope for filesystem checks.
    // Checking their reachability could be added later.
    if target.starts_with("http://") || target.starts_with("https://") {
        return Resolution::Ok;
    }

    // A leading '#' means the whole target is an anchor into the same
    // file. Anywhere else, the fragment is irrelevant to resolution and
    // gets cut off before we look at the path portion.
    let path_part = match target.find('#') {
        Some(0) => return Resolution::Ok,
        Some(at) => &target[..at],
        None => target,
    };

    // A trailing '/' means the author meant a directory. The slash is
    // stripped before the filesystem query because stat("name/") fails
    // outright on most hosts when 'name' is a regular file, and we want
    // to report "not a directory" there, not "doesn't exist".
    let wants_directory = path_part.ends_with('/');
    let trimmed = path_part.trim_end_matches('/');

    let base = containing_file.parent().unwrap_or_else(|| Path::new(""));
    let resolved = base.join(to_native(trimmed));

    if !resolved.exists() {
        return Resolution::DoesNotExist;
    }

    if wants_directory {
        if resolved.is_dir() {
            Resolution::Ok
        } else {
            Resolution::NotADirectory
        }
    } else if resolved.is_file() {
        Resolution::Ok
    } else {
        Resolution::NotAFile
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum instead of a string?
//    - The original outcomes are a small fixed set
//    - An enum makes the compiler check that every outcome is handled
//    - The reason() method keeps the display strings in one place
//
// 2. What is matches!?
//    - A macro that tests whether a value fits a pattern
//    - matches!(self, Resolution::Ok) is shorthand for a match returning bool
//
// 3. Why &Path and not &str for the file?
//    - Path is the type the filesystem APIs speak
//    - The caller already has a PathBuf from directory walking
//
// 4. What does unwrap_or_else(|| Path::new("")) do?
//    - parent() returns None for paths like "a.md" with no directory part
//    - An empty base path means "resolve against the current directory"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Builds the little documentation tree the tests resolve against:
    //   docs/a.md
    //   docs/b.md
    //   docs/sub/        (directory)
    //   docs/flat        (regular file)
    //   images/pic.png
    // Returns the tempdir (kept alive so the tree isn't deleted) and the
    // path of docs/a.md, the file the links notionally live in.
    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::create_dir(docs.join("sub")).unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(docs.join("a.md"), "# a\n").unwrap();
        fs::write(docs.join("b.md"), "# b\n").unwrap();
        fs::write(docs.join("flat"), "not a directory\n").unwrap();
        fs::write(dir.path().join("images").join("pic.png"), [0u8; 4]).unwrap();
        let a = docs.join("a.md");
        (dir, a)
    }

    #[test]
    fn external_links_are_ok_without_touching_the_filesystem() {
        // The containing file doesn't even exist - external targets must
        // still come back Ok.
        let missing = Path::new("no/such/file.md");
        assert_eq!(resolve(missing, "http://example.com/"), Resolution::Ok);
        assert_eq!(
            resolve(missing, "https://example.com/deep/page#frag"),
            Resolution::Ok
        );
    }

    #[test]
    fn same_document_anchors_are_ok() {
        let missing = Path::new("no/such/file.md");
        assert_eq!(resolve(missing, "#some-header"), Resolution::Ok);
        assert_eq!(resolve(missing, "#"), Resolution::Ok);
    }

    #[test]
    fn existing_sibling_file_is_ok() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "b.md"), Resolution::Ok);
    }

    #[test]
    fn missing_file_does_not_exist() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "missing.md"), Resolution::DoesNotExist);
    }

    #[test]
    fn fragment_is_cut_off_before_resolving() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "b.md#section"), Resolution::Ok);
        assert_eq!(resolve(&a, "missing.md#section"), Resolution::DoesNotExist);
        // Same answers as the fragment-free targets
        assert_eq!(resolve(&a, "b.md#x"), resolve(&a, "b.md"));
        assert_eq!(resolve(&a, "missing.md#x"), resolve(&a, "missing.md"));
    }

    #[test]
    fn trailing_slash_over_a_regular_file_is_not_a_directory() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "flat/"), Resolution::NotADirectory);
    }

    #[test]
    fn trailing_slash_over_a_directory_is_ok() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "sub/"), Resolution::Ok);
        // Fragment after the slash changes nothing
        assert_eq!(resolve(&a, "sub/#heading"), Resolution::Ok);
    }

    #[test]
    fn no_trailing_slash_over_a_directory_is_not_a_file() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "sub"), Resolution::NotAFile);
    }

    #[test]
    fn missing_directory_does_not_exist() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "nowhere/"), Resolution::DoesNotExist);
    }

    #[test]
    fn parent_relative_path_resolves_one_level_up() {
        let (_dir, a) = fixture();
        assert_eq!(resolve(&a, "../images/pic.png"), Resolution::Ok);
        assert_eq!(resolve(&a, "../images/gone.png"), Resolution::DoesNotExist);
    }

    #[test]
    fn resolving_twice_gives_the_same_answer() {
        let (_dir, a) = fixture();
        for target in ["b.md", "missing.md", "sub/", "sub", "flat/", "#top"] {
            assert_eq!(resolve(&a, target), resolve(&a, target));
        }
    }

    #[test]
    fn reason_strings_match_the_diagnostics() {
        assert_eq!(Resolution::DoesNotExist.reason(), "doesn't exist");
        assert_eq!(Resolution::NotADirectory.reason(), "not a directory");
        assert_eq!(Resolution::NotAFile.reason(), "not a file");
    }
}
