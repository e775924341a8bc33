// src/report.rs
// =============================================================================
// This module renders a ValidationReport as human-readable text.
//
// The layout is a two-phase report:
// 1. A summary block with the counts
// 2. Either a success notice, or one detailed entry per broken link
//
// Paths are shown relative to the base directory - "guides/foo.mdx:12" is
// what an author greps for, not the absolute path of the checkout.
//
// The JSON alternative doesn't live here: --json serializes the
// ValidationReport struct directly in main.rs.
//
// Rust concepts:
// - String building with push_str and format!
// - Path::strip_prefix: Returns Result, since the prefix may not match
// =============================================================================

use std::path::Path;

use crate::checker::ValidationReport;

// Renders the full report, in broken-link accumulation order
//
// Parameters:
//   report: the accumulated run outcome
//   base_dir: the documentation root, used to relativize displayed paths
//
// Returns: the complete report text, ready to print
pub fn render_report(report: &ValidationReport, base_dir: &Path) -> String {
    let mut out = String::new();

    out.push_str("## Link Validation Report\n\n");
    out.push_str("**Summary:**\n");
    out.push_str(&format!(
        "- Total MDX files scanned: {}\n",
        report.files_scanned
    ));
    out.push_str(&format!(
        "- Total internal links found: {}\n",
        report.total_links
    ));
    out.push_str(&format!("- Valid links: {}\n", report.valid_links));
    out.push_str(&format!("- Broken links: {}\n\n", report.broken_count()));

    if report.is_clean() {
        out.push_str("✅ All internal links are valid!\n");
        return out;
    }

    out.push_str("**Broken Links:**\n\n");
    for broken in &report.broken_links {
        let source = display_relative(&broken.source, base_dir);
        let expected = display_relative(&broken.expected_path, base_dir);

        out.push_str(&format!("- **{}:{}**\n", source, broken.line_number));
        out.push_str(&format!("  - Link: `{}`\n", broken.link));
        out.push_str(&format!("  - Expected file: `{}`\n", expected));
        out.push_str("  - Status: File does not exist\n\n");
    }

    out
}

// Shows a path relative to the base directory where possible
//
// A path outside the base dir (possible via ".." links, which resolution
// passes through untouched) is shown verbatim rather than dropped.
fn display_relative(path: &Path, base_dir: &Path) -> String {
    match path.strip_prefix(base_dir) {
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
