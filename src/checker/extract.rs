// src/checker/extract.rs
// =============================================================================
// This module extracts candidate links from document text.
//
// Two link syntaxes appear in our documents:
// 1. Markdown inline links:  [label](/path)
// 2. HTML-style attributes:  href="/path" or href='/path'
//
// Extraction is line-oriented on purpose: every occurrence carries the
// 1-based line number it was found on, which is what makes the final report
// actionable ("fix guides/foo.mdx line 12"). Within one line, all markdown
// matches are emitted before all href matches, each left to right - the
// report order depends on this, so don't reorder the two passes.
//
// Rust concepts:
// - LazyLock: Compile the regexes once, on first use
// - captures_iter: All non-overlapping matches on a line, not just the first
// - enumerate: Pairs each line with its index while iterating
// =============================================================================

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::checker::ignore::should_ignore;

// Matches markdown inline links: [label](target)
// Group 1 is the label (unused), group 2 is the target.
// The label is any run of characters that isn't ']', the target any run
// that isn't ')' - both must be non-empty for the syntax to count.
//
// Regex::new returns Result, so we use .unwrap() which panics on error.
// This is OK here because the pattern is a constant and known to be valid.
static MD_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

// Matches HTML-style href attributes: href="target" or href='target'
// Group 1 is the target.
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["']([^"']+)["']"#).unwrap());

// One matched link reference within a document
//
// #[derive(Serialize)] lets the occurrence flow into the JSON report
// #[derive(Debug, Clone, PartialEq)] enables debugging and test assertions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkOccurrence {
    /// The raw link target, exactly as written in the document
    pub link: String,
    /// 1-based line number the link was found on
    pub line_number: usize,
    /// The document the link was found in
    pub source: PathBuf,
}

// Extracts all in-scope links from document content
//
// Parameters:
//   content: the document text (borrowed as &str)
//   source: the document the content came from (recorded on each occurrence)
//
// Returns: Vec<LinkOccurrence> in report order:
//   lines ascending; within a line, markdown matches before href matches,
//   each left to right
//
// No deduplication happens here - the same target twice on a line is two
// occurrences, because each one is a distinct spot an author has to fix.
pub fn extract_links(content: &str, source: &Path) -> Vec<LinkOccurrence> {
    let mut links = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        // Markdown pass: [label](target)
        for caps in MD_LINK_RE.captures_iter(line) {
            let link = &caps[2];
            if !should_ignore(link) {
                links.push(LinkOccurrence {
                    link: link.to_string(),
                    line_number,
                    source: source.to_path_buf(),
                });
            }
        }

        // href pass: href="target" / href='target'
        for caps in HREF_RE.captures_iter(line) {
            let link = &caps[1];
            if !should_ignore(link) {
                links.push(LinkOccurrence {
                    link: link.to_string(),
                    line_number,
                    source: source.to_path_buf(),
                });
            }
        }
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why regexes instead of a markdown parser?
//    - Our documents are MDX: markdown mixed with JSX components
//    - A CommonMark parser would skip links inside component props and
//      code fences, and it doesn't report line numbers per link
//    - Two small line-level patterns see exactly what an author typed
//
// 2. What is LazyLock?
//    - A standard-library cell that runs its closure once, on first access
//    - Compiling a regex is not free, so we do it once per pattern for the
//      whole run instead of once per line
//
// 3. What is captures_iter?
//    - Like exec() in a loop in JavaScript: yields every non-overlapping
//      match on the input, left to right
//    - caps[0] is the whole match, caps[1] / caps[2] are the groups
//
// 4. Why &caps[2] and then .to_string()?
//    - Indexing a capture group borrows from the line
//    - The occurrence outlives the line, so it needs its own owned String
// -----------------------------------------------------------------------------
