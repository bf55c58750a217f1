//! Shared types serialized between the build stages.
//!
//! These shapes are written to disk (sidecar metadata files, timeline pages)
//! and must round-trip losslessly through JSON.

use serde::{Deserialize, Serialize};

/// A single blog post's extracted metadata. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Text of the first element bearing the configured title class,
    /// whitespace-trimmed. Empty if no such element exists.
    pub title: String,
    /// Text of the first element bearing the configured teaser class,
    /// whitespace-trimmed. Empty if no such element exists.
    pub teaser: String,
    /// `YYYY-MM-DD` derived from the directory name's `YYMMDD` prefix
    /// (two-digit years map to the 2000s). Empty if the name has no
    /// six-digit prefix.
    pub date: String,
    /// `/` followed by the post directory's own name.
    pub url: String,
    /// Text of every element bearing the configured tag class, in document
    /// order, each trimmed. Duplicates are kept as-is.
    pub tags: Vec<String>,
}

/// On-disk shape of a per-directory sidecar metadata file.
///
/// The nesting is significant: sidecar files contain `{ "post": { ... } }`,
/// not a bare [`Post`] object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub post: Post,
}

/// A bounded batch of posts destined for one timeline output file.
///
/// Owned and mutated exclusively by a single timeline consumer; reset to
/// empty after each page write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub posts: Vec<Post>,
}
