// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The surface is deliberately tiny: one optional positional argument for
// the directory to scan, defaulting to the current directory. clap still
// gives us --help and --version for free.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "docs-linkcheck",
    version = "0.1.0",
    about = "Scans a documentation tree for broken relative links",
    long_about = "docs-linkcheck walks a directory of markdown files, resolves every \
                  relative link and image reference against the filesystem, and reports \
                  the ones that point at missing files or the wrong kind of entry. \
                  External http(s) links and same-document anchors are skipped."
)]
pub struct Cli {
    /// Directory to scan for markdown files
    ///
    /// This is a positional argument; when omitted, the scan starts from
    /// the current working directory.
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
