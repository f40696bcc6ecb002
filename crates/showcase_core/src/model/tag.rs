//! Tag classifier model.
//!
//! # Responsibility
//! - Define the labeled, colored classifier attached to showcase projects.
//!
//! # Invariants
//! - `key` is unique within a catalog registry and never changes.
//! - `color` is a CSS hex color (`#rrggbb` or `#rrggbbaa`); the catalog
//!   validates the format at construction time.

use serde::{Deserialize, Serialize};

/// A labeled, colored classifier used for project filtering and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable registry key, used by projects to reference this tag.
    pub key: String,
    /// Short display name.
    pub label: String,
    /// Explanatory text shown on hover/detail.
    pub description: String,
    /// CSS hex color used for visual differentiation.
    pub color: String,
}

impl Tag {
    /// Creates a tag from display data.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            color: color.into(),
        }
    }
}
