// src/checker/mod.rs
// =============================================================================
// This module contains all link validation logic.
//
// Submodules:
// - extract:  Finds candidate links in document text, line by line
// - ignore:   Decides which candidates are out of scope
// - resolve:  Maps a link to the file it should point at
// - validate: Drives the scan and accumulates the results
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod extract;
mod ignore;
mod resolve;
mod validate;

// Re-export public items from submodules
// This lets users write `checker::extract_links()` instead of
// `checker::extract::extract_links()`
pub use extract::{extract_links, LinkOccurrence};
pub use ignore::should_ignore;
pub use resolve::resolve;
pub use validate::{validate_documents, BrokenLink, ValidationReport};
