// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Note: the set of documents to scan is NOT a CLI argument. It is build-time
// configuration (see src/manifest.rs), so the CLI only controls how the
// report is printed.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-warden",
    version = "0.1.0",
    about = "Validates internal links in the documentation tree",
    long_about = "link-warden scans a fixed set of documentation files for internal links, \
                  resolves each link to the file it should point at, and reports the links \
                  whose targets are missing. It's perfect for CI/CD pipelines: the process \
                  exits non-zero when broken links are found."
)]
pub struct Cli {
    /// Output the validation report in JSON format instead of text
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is there no subcommand or positional argument?
//    - The tool does exactly one thing: validate the fixed document set
//    - The document list is compiled into the binary (src/manifest.rs)
//    - Adding a path argument would invite pointing the tool at trees it
//      was never configured for, so we deliberately don't
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic (including --help and --version)
//    - Debug: generates code to print the struct for debugging
//
// 3. Where do the help texts come from?
//    - The /// doc comments on fields become the --help descriptions
//    - clap reads them at compile time via the derive macro
// -----------------------------------------------------------------------------
