// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the scan from the chosen root directory
// 3. Exit with proper code (0 = scan completed, 2 = I/O error)
//
// Note that finding broken links does NOT change the exit code: the tool
// is a reporting aid, and the broken-link count is informational. Only a
// scan that could not finish (an unreadable file or directory) exits
// nonzero.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod report; // src/report.rs - scan driver and output
mod resolver; // src/resolver/ - link target resolution
mod scanner; // src/scanner/ - file walking and link extraction

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run() {
        Ok(()) => 0,
        Err(e) => {
            // An I/O failure aborted the scan - print it and exit with 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(()) = scan completed (broken links may still have been reported)
//   Err = the scan could not finish
fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // The summary is printed by run_scan itself; the counters come back
    // in case a caller wants them, but main only cares that the scan ran.
    report::run_scan(&cli.root)?;

    Ok(())
}
