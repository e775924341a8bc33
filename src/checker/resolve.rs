// src/checker/resolve.rs
// =============================================================================
// This module maps a raw link to the file it is expected to point at.
//
// Resolution is a pure function of the link string and the base directory:
// it never touches the filesystem, and the same input always gives the
// same path. The existence check happens later, in the validator.
//
// Examples (base dir /docs, extension mdx):
//   "/"                        -> /docs/index.mdx
//   "/guides/first-listing"    -> /docs/guides/first-listing.mdx
//   "guides/first-listing.mdx" -> /docs/guides/first-listing.mdx
//   "/path?query=1#frag"       -> /docs/path.mdx
//
// Rust concepts:
// - &str slicing: Truncating at a byte index found by find()
// - strip_prefix: Removing a prefix if present, leaving the rest borrowed
// - Path::join: Building paths without string concatenation
// =============================================================================

use std::path::{Path, PathBuf};

use crate::manifest::DOC_EXTENSION;

// Resolves a raw link to the absolute path of its expected file
//
// Rules, applied in order:
// 1. "/" is the root document -> <base_dir>/index.<ext>
// 2. Strip one leading '/' - "/guides/x" and "guides/x" resolve the same
//    way, both against base_dir (never against the linking document; see
//    the note below)
// 3. Truncate at the first '?' and then at the first '#'
// 4. Empty after stripping (e.g. "?tab=1" or "/?tab=1") -> the root
//    document again
// 5. Append the document extension unless it's already there
// 6. Join onto base_dir
//
// No normalization of ".." or doubled separators happens - whatever is
// left after the rules above goes to the existence check as-is.
//
// Note: bare relative links conflate with root-absolute ones on purpose.
// A link "sibling-page" written in guides/foo.mdx is checked against
// <base_dir>/sibling-page.mdx, not <base_dir>/guides/sibling-page.mdx.
// The docs trees we validate only use root-absolute links, so this keeps
// resolution a one-argument rule; revisit here if that ever changes.
pub fn resolve(link: &str, base_dir: &Path) -> PathBuf {
    // Handle the root path
    if link == "/" {
        return base_dir.join(format!("index.{}", DOC_EXTENSION));
    }

    // Remove a single leading slash
    let clean = link.strip_prefix('/').unwrap_or(link);

    // Remove query string, then fragment
    let clean = match clean.find('?') {
        Some(pos) => &clean[..pos],
        None => clean,
    };
    let clean = match clean.find('#') {
        Some(pos) => &clean[..pos],
        None => clean,
    };

    // Handle empty string after cleanup
    if clean.is_empty() {
        return base_dir.join(format!("index.{}", DOC_EXTENSION));
    }

    // Add the document extension if not present
    let extension = format!(".{}", DOC_EXTENSION);
    if clean.ends_with(&extension) {
        base_dir.join(clean)
    } else {
        base_dir.join(format!("{}{}", clean, extension))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return PathBuf instead of String?
//    - PathBuf is the owned path type; Path is its borrowed counterpart
//      (like String and &str)
//    - Path::join handles the separator, so we never paste '/' by hand
//
// 2. What does strip_prefix('/') return?
//    - Option<&str>: Some(rest) if the prefix was there, None otherwise
//    - .unwrap_or(link) falls back to the original when there was nothing
//      to strip - no allocation either way
//
// 3. Why slice with find() instead of split('?')?
//    - find() gives the byte index of the first occurrence (or None)
//    - &clean[..pos] is the part before it, still borrowed from the input
//    - Both '?' and '#' are ASCII, so slicing at their index can't land
//      in the middle of a UTF-8 character
// -----------------------------------------------------------------------------
