// src/checker/ignore.rs
// =============================================================================
// This module decides which extracted link candidates are out of scope.
//
// We only validate internal document links. Everything else - external
// URLs, in-page anchors, asset paths, email links - is filtered out here
// before it ever reaches the resolver.
//
// Rust concepts:
// - &str methods: starts_with / contains for cheap prefix tests
// - bool-returning predicate functions
// =============================================================================

// Returns true when a link should be excluded from validation
//
// The predicate is total: any string lands on exactly one side, and
// calling it twice on the same input always gives the same answer.
//
// Excluded:
// - empty targets (nothing to validate)
// - http:// and https:// (external URLs - out of scope)
// - #... (pure in-page anchors - out of scope)
// - /images/... and /logo/... (asset paths, assumed valid)
// - anything containing /favicon. (special-cased asset)
// - mailto:... (not a document link)
pub fn should_ignore(link: &str) -> bool {
    link.is_empty()
        || link.starts_with("http://")
        || link.starts_with("https://")
        || link.starts_with('#')
        || link.starts_with("/images/")
        || link.starts_with("/logo/")
        || link.contains("/favicon.")
        || link.starts_with("mailto:")
}
