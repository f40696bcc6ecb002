//! Author block presentation rules.
//!
//! # Responsibility
//! - Decide how a post's author block renders given per-author data
//!   completeness (full cards vs. avatar-only vs. nothing).
//! - Merge externally resolved avatar URLs into author records without
//!   mutating caller inputs.
//!
//! # Invariants
//! - No operation here raises errors; incomplete input degrades to the
//!   documented fallbacks.
//! - The empty-author case is decided before the all-nameless rule, so the
//!   vacuous "every author is nameless" truth is never observable.

use crate::model::author::Author;

/// How each author entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full card with name and metadata.
    Full,
    /// Avatar-only row, used when no author has a name.
    ImageOnly,
}

/// Resolved presentation decision for a post's author block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDecision {
    /// Render no container element at all.
    Suppress,
    /// Render `author_count` entries in the given mode.
    Render {
        mode: LayoutMode,
        author_count: usize,
    },
}

impl LayoutDecision {
    /// Layout hint for the caller's grid: full cards pair up into two
    /// columns once there is more than one author.
    pub fn two_column(&self) -> bool {
        matches!(
            self,
            Self::Render {
                mode: LayoutMode::Full,
                author_count,
            } if *author_count > 1
        )
    }
}

/// Decides the author block layout for one post.
///
/// Empty input yields [`LayoutDecision::Suppress`]; otherwise the mode is
/// [`LayoutMode::ImageOnly`] iff every author lacks a name.
pub fn resolve_layout(authors: &[Author]) -> LayoutDecision {
    if authors.is_empty() {
        return LayoutDecision::Suppress;
    }
    let image_only = authors.iter().all(|author| !author.has_name());
    LayoutDecision::Render {
        mode: if image_only {
            LayoutMode::ImageOnly
        } else {
            LayoutMode::Full
        },
        author_count: authors.len(),
    }
}

/// Merges externally resolved avatar URLs into author records, positionally.
///
/// Position `i` of the result carries `resolved_image_urls[i]` when present,
/// otherwise the author's own `image_url`. A short override list means "no
/// override available" for the tail, never an error; surplus overrides are
/// ignored. Pure transform: inputs are left untouched.
pub fn merge_images(authors: &[Author], resolved_image_urls: &[Option<String>]) -> Vec<Author> {
    authors
        .iter()
        .enumerate()
        .map(|(position, author)| {
            let mut merged = author.clone();
            if let Some(Some(url)) = resolved_image_urls.get(position) {
                merged.image_url = Some(url.clone());
            }
            merged
        })
        .collect()
}
