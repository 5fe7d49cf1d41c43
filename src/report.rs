// src/report.rs
// =============================================================================
// This module drives the scan and reports what it finds.
//
// The flow is one linear, single-threaded pass:
// 1. Enumerate markdown files under the root
// 2. Read each file and extract its link matches
// 3. Resolve every match against the filesystem
// 4. Print a diagnostic for each broken one
// 5. Print the closing "<broken>/<total>" summary
//
// Broken links are ordinary results, not errors - the scan always runs to
// completion and always prints the summary. Only real I/O failures (an
// unreadable file or directory) abort the scan, by propagating up as errors.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::resolver;
use crate::scanner;

// Counters accumulated over a whole scan
//
// Kept as a plain value that run_scan builds up and returns - there is no
// process-wide state, the tool runs once and exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of links that resolved to something broken
    pub broken: usize,
    /// Number of links examined, broken or not
    pub total: usize,
}

// Scans every markdown file under `root` and prints the report
//
// Parameters:
//   root: directory to scan
//
// Returns: Result<RunSummary>
//   Success: the final counters (also printed as the summary line)
//   Error: a file or directory could not be read
pub fn run_scan(root: &Path) -> Result<RunSummary> {
    println!("Searching and checking links...");

    let mut summary = RunSummary::default();

    for file in scanner::markdown_files(root)? {
        // read_to_string opens and closes the file within this call, so
        // the handle is released before we move on, even on error
        let contents = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        for link in scanner::find_links(&contents) {
            let outcome = resolver::resolve(&file, &link.target);
            summary.total += 1;

            if !outcome.is_ok() {
                println!(
                    "  file {}, line {}: {}",
                    file.display(),
                    link.line,
                    outcome.reason()
                );
                println!("    {}", link.raw);
                println!();
                summary.broken += 1;
            }
        }
    }

    println!(
        "{}/{} links seem to be broken.",
        summary.broken, summary.total
    );

    Ok(summary)
}
