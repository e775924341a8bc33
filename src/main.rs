// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the validation pass over the build-time document manifest
// 3. Print the report (text or JSON)
// 4. Exit with proper code (0 = clean, 1 = broken links, 2 = error)
//
// Rust concepts used:
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to separate success from failure
// - std::process::exit: Terminating with an explicit status code
// =============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use link_warden::checker::{validate_documents, ValidationReport};
use link_warden::cli::Cli;
use link_warden::manifest;
use link_warden::report::render_report;

fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Ok(2) = internal error
//   Err = unexpected error
fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    let base_dir = Path::new(manifest::BASE_DIR);
    let documents = manifest::document_set();

    // The banner is chatter, not report - suppress it in JSON mode so
    // stdout stays parseable
    if !cli.json {
        println!("Scanning MDX files for internal links...\n");
    }

    // Run the whole pipeline: read each document, extract links, resolve
    // them, check existence, accumulate the outcome
    let report = validate_documents(&documents, base_dir);

    // Print results and determine exit code
    print_results(&report, base_dir, cli.json)?;

    Ok(report.exit_code())
}

// Prints the report either as text or JSON
// Parameters:
//   report: the accumulated run outcome
//   base_dir: documentation root, used to relativize displayed paths
//   json: whether to output JSON format
fn print_results(report: &ValidationReport, base_dir: &Path, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        // Print the human-readable report
        print!("{}", render_report(report, base_dir));
    }
    Ok(())
}
