// src/checker/validate.rs
// =============================================================================
// This module drives the whole validation pass.
//
// The pipeline is three sequential stages:
// 1. Scan:    read each document in the manifest, in order
// 2. Check:   extract links, resolve each one, test existence
// 3. Report:  render the accumulated ValidationReport (src/report.rs)
// This module owns stages 1 and 2 plus the accumulator they fill.
//
// Everything is synchronous and single-threaded. A full run over a docs
// tree is dozens of small file reads - there's nothing to overlap, and a
// strictly sequential pass is what keeps the report order deterministic.
//
// Error philosophy:
// - A document we can't read is logged to stderr and skipped; one bad
//   file never aborts the run
// - A broken link is NOT an error - it's the result we're here to compute,
//   accumulated and reported at the end
//
// Rust concepts:
// - Result<T, E> and match: Recovering from a failed read inline
// - Struct methods: exit_code() keeps the CI contract next to the data
// =============================================================================

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::extract::extract_links;
use crate::checker::resolve::resolve;

// A link whose resolved target does not exist on disk
//
// #[derive(Serialize)] lets us convert the record to JSON for --json output
#[derive(Debug, Clone, Serialize)]
pub struct BrokenLink {
    /// The document the link was found in
    pub source: PathBuf,
    /// 1-based line number within the source document
    pub line_number: usize,
    /// The raw link, exactly as written
    pub link: String,
    /// The file the link was expected to point at
    pub expected_path: PathBuf,
}

// The accumulated outcome of one validation run
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// How many documents the run covered (read failures included)
    pub files_scanned: usize,
    /// Every in-scope link occurrence found
    pub total_links: usize,
    /// Links whose resolved target exists
    pub valid_links: usize,
    /// Links whose resolved target is missing, in discovery order
    pub broken_links: Vec<BrokenLink>,
}

impl ValidationReport {
    /// Number of broken links found
    pub fn broken_count(&self) -> usize {
        self.broken_links.len()
    }

    /// True when the run found no broken links
    pub fn is_clean(&self) -> bool {
        self.broken_links.is_empty()
    }

    /// Process exit code for this report: 0 = clean, 1 = broken links found
    ///
    /// CI pipelines gate on this, so it's the one machine-readable output
    /// that exists even without --json.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

// Runs the validation pass over a list of documents
//
// Parameters:
//   documents: the documents to scan, in scan order
//   base_dir: the directory all internal links resolve against
//
// Returns: a ValidationReport; broken_links preserves document order,
// then per-document extraction order
//
// Invariant: total_links == valid_links + broken_links.len()
pub fn validate_documents(documents: &[PathBuf], base_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport {
        files_scanned: documents.len(),
        total_links: 0,
        valid_links: 0,
        broken_links: Vec::new(),
    };

    for document in documents {
        // Stage 1: read the document
        let content = match fs::read_to_string(document) {
            Ok(content) => content,
            Err(e) => {
                // An unreadable document is reported, not fatal - keep going
                eprintln!("Error reading {}: {}", document.display(), e);
                continue;
            }
        };

        // Stage 2: extract, resolve, check existence
        for occurrence in extract_links(&content, document) {
            report.total_links += 1;

            let expected_path = resolve(&occurrence.link, base_dir);
            if expected_path.exists() {
                report.valid_links += 1;
            } else {
                report.broken_links.push(BrokenLink {
                    source: occurrence.source,
                    line_number: occurrence.line_number,
                    link: occurrence.link,
                    expected_path,
                });
            }
        }
    }

    report
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the function take &[PathBuf] instead of using the manifest?
//    - The binary passes manifest::document_set(), but tests pass lists
//      pointing into a temporary directory
//    - Taking the list as a parameter is what makes the pipeline testable
//      without touching the real docs tree
//
// 2. What does continue do in the error arm?
//    - Skips the rest of this loop iteration and moves to the next document
//    - Combined with the eprintln!, that's the whole recovery story for an
//      unreadable file
//
// 3. Why eprintln! and not println!?
//    - Read errors are diagnostics, the report is the product
//    - Keeping them on stderr means --json output on stdout stays valid JSON
//
// 4. Why is there no is_broken() error type for broken links?
//    - A missing target is the expected, first-class outcome of validation
//    - Modeling it as an error would force ? or match at every call site
//      for something that isn't exceptional at all
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_contract() {
        let clean = ValidationReport {
            files_scanned: 1,
            total_links: 2,
            valid_links: 2,
            broken_links: Vec::new(),
        };
        assert!(clean.is_clean());
        assert_eq!(clean.exit_code(), 0);

        let broken = ValidationReport {
            files_scanned: 1,
            total_links: 2,
            valid_links: 1,
            broken_links: vec![BrokenLink {
                source: PathBuf::from("/docs/index.mdx"),
                line_number: 3,
                link: "/missing".to_string(),
                expected_path: PathBuf::from("/docs/missing.mdx"),
            }],
        };
        assert!(!broken.is_clean());
        assert_eq!(broken.broken_count(), 1);
        assert_eq!(broken.exit_code(), 1);
    }

    #[test]
    fn test_unreadable_documents_still_count_as_scanned() {
        // Neither path exists; both reads fail and are skipped
        let documents = vec![
            PathBuf::from("/nonexistent/a.mdx"),
            PathBuf::from("/nonexistent/b.mdx"),
        ];
        let report = validate_documents(&documents, Path::new("/nonexistent"));
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.total_links, 0);
        assert_eq!(report.valid_links, 0);
        assert!(report.is_clean());
    }
}
