//! Post author model.
//!
//! # Responsibility
//! - Define the author record consumed by the presentation resolver.
//!
//! # Invariants
//! - All fields are optional; completeness varies per post and the resolver
//!   must handle every combination.
//! - `title` and `url` are opaque pass-through display data, never
//!   interpreted by the core.

use serde::{Deserialize, Serialize};

/// One author attached to a blog post.
///
/// Supplied per render by the surrounding content pipeline; the core never
/// stores or mutates these records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name. `None` or empty means the author is nameless.
    pub name: Option<String>,
    /// Avatar reference. Serialized as `imageURL` to match the external
    /// post-metadata schema.
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    /// Opaque display title (e.g. a role line).
    pub title: Option<String>,
    /// Opaque profile link.
    pub url: Option<String>,
}

impl Author {
    /// Creates an author with just a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns whether this author has a usable display name.
    ///
    /// Mirrors the authored-data convention: an empty string counts as
    /// nameless, whitespace does not.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }
}
