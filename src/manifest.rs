// src/manifest.rs
// =============================================================================
// This module holds the build-time configuration of the scan: which
// documents get validated, where the documentation tree lives, and what
// file extension a document carries.
//
// The list is deliberately a constant, not something discovered at runtime:
// the validator is pinned to a known docs tree, and adding a page to the
// site means adding it here too. Scan order is list order, and the final
// report preserves it.
//
// Rust concepts:
// - const: Compile-time constants baked into the binary
// - &[&str]: A slice of string slices (borrowed, zero allocation)
// - PathBuf: An owned filesystem path
// =============================================================================

use std::path::PathBuf;

/// Root of the documentation tree. Every internal link resolves against it.
pub const BASE_DIR: &str = "/home/user/ebay-mcp-docs";

/// File extension of a documentation page, without the leading dot.
pub const DOC_EXTENSION: &str = "mdx";

/// Every document subject to link validation, in scan order.
pub const DOCUMENT_SET: &[&str] = &[
    "/home/user/ebay-mcp-docs/quickstart.mdx",
    "/home/user/ebay-mcp-docs/installation.mdx",
    "/home/user/ebay-mcp-docs/configuration.mdx",
    "/home/user/ebay-mcp-docs/index.mdx",
    "/home/user/ebay-mcp-docs/support/faq.mdx",
    "/home/user/ebay-mcp-docs/support/troubleshooting.mdx",
    "/home/user/ebay-mcp-docs/support/changelog.mdx",
    "/home/user/ebay-mcp-docs/snippets/snippet-intro.mdx",
    "/home/user/ebay-mcp-docs/mcp/other-clients.mdx",
    "/home/user/ebay-mcp-docs/mcp/cursor.mdx",
    "/home/user/ebay-mcp-docs/mcp/claude-desktop.mdx",
    "/home/user/ebay-mcp-docs/guides/running-promotions.mdx",
    "/home/user/ebay-mcp-docs/guides/managing-orders.mdx",
    "/home/user/ebay-mcp-docs/guides/best-practices.mdx",
    "/home/user/ebay-mcp-docs/guides/bulk-operations.mdx",
    "/home/user/ebay-mcp-docs/guides/first-listing.mdx",
    "/home/user/ebay-mcp-docs/features/order-fulfillment.mdx",
    "/home/user/ebay-mcp-docs/features/marketing-campaigns.mdx",
    "/home/user/ebay-mcp-docs/features/inventory-management.mdx",
    "/home/user/ebay-mcp-docs/features/analytics-reporting.mdx",
    "/home/user/ebay-mcp-docs/features/account-management.mdx",
    "/home/user/ebay-mcp-docs/authentication/token-management.mdx",
    "/home/user/ebay-mcp-docs/authentication/overview.mdx",
    "/home/user/ebay-mcp-docs/authentication/oauth-setup.mdx",
    "/home/user/ebay-mcp-docs/authentication/client-credentials.mdx",
    "/home/user/ebay-mcp-docs/api-reference/introduction.mdx",
    "/home/user/ebay-mcp-docs/advanced/testing.mdx",
    "/home/user/ebay-mcp-docs/advanced/rate-limits.mdx",
    "/home/user/ebay-mcp-docs/advanced/error-handling.mdx",
    "/home/user/ebay-mcp-docs/advanced/contributing.mdx",
    "/home/user/ebay-mcp-docs/advanced/architecture.mdx",
    "/home/user/ebay-mcp-docs/api-reference/marketing/promotions.mdx",
    "/home/user/ebay-mcp-docs/api-reference/marketing/overview.mdx",
    "/home/user/ebay-mcp-docs/api-reference/marketing/campaigns.mdx",
    "/home/user/ebay-mcp-docs/api-reference/fulfillment/shipping.mdx",
    "/home/user/ebay-mcp-docs/api-reference/fulfillment/overview.mdx",
    "/home/user/ebay-mcp-docs/api-reference/fulfillment/orders.mdx",
    "/home/user/ebay-mcp-docs/api-reference/inventory/overview.mdx",
    "/home/user/ebay-mcp-docs/api-reference/inventory/offers.mdx",
    "/home/user/ebay-mcp-docs/api-reference/inventory/locations.mdx",
    "/home/user/ebay-mcp-docs/api-reference/inventory/items.mdx",
    "/home/user/ebay-mcp-docs/api-reference/analytics/overview.mdx",
    "/home/user/ebay-mcp-docs/api-reference/analytics/traffic-reports.mdx",
    "/home/user/ebay-mcp-docs/api-reference/account/programs.mdx",
    "/home/user/ebay-mcp-docs/api-reference/account/policies.mdx",
    "/home/user/ebay-mcp-docs/api-reference/account/overview.mdx",
];

// Returns the document set as owned paths, in scan order
//
// The validator takes &[PathBuf] rather than reading the constant directly,
// so tests can hand it a list pointing into a temporary directory.
pub fn document_set() -> Vec<PathBuf> {
    DOCUMENT_SET.iter().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_set_preserves_order() {
        let documents = document_set();
        assert_eq!(documents.len(), DOCUMENT_SET.len());
        assert_eq!(
            documents.first().unwrap().to_str().unwrap(),
            "/home/user/ebay-mcp-docs/quickstart.mdx"
        );
        assert_eq!(
            documents.last().unwrap().to_str().unwrap(),
            "/home/user/ebay-mcp-docs/api-reference/account/overview.mdx"
        );
    }

    #[test]
    fn test_every_document_lives_under_base_dir() {
        for entry in DOCUMENT_SET {
            assert!(
                entry.starts_with(BASE_DIR),
                "document outside the base dir: {}",
                entry
            );
        }
    }
}
