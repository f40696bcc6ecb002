//! Showcase project model.
//!
//! # Responsibility
//! - Define the project record and its closed category enumeration.
//! - Provide small display helpers (`live_site`, type labels).
//!
//! # Invariants
//! - `tags` is a non-empty set of registry keys; the catalog enforces both
//!   non-emptiness and referential validity at construction time.
//! - The project list is authored once at startup; there is no runtime
//!   mutation path.

use serde::{Deserialize, Serialize};

/// Closed category set for showcase projects.
///
/// Serialized as lowercase strings to match the authored data schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Websites and web frontends.
    Web,
    /// Applications (desktop/mobile).
    App,
    /// Commercial work.
    Commerce,
    /// Personal projects.
    Personal,
    /// Toys and experiments.
    Toy,
    /// Everything else.
    Other,
}

impl ProjectType {
    /// Every category, in canonical declaration order.
    pub const ALL: [ProjectType; 6] = [
        Self::Web,
        Self::App,
        Self::Commerce,
        Self::Personal,
        Self::Toy,
        Self::Other,
    ];

    /// Stable string id used in authored data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
            Self::Commerce => "commerce",
            Self::Personal => "personal",
            Self::Toy => "toy",
            Self::Other => "other",
        }
    }

    /// User-facing section heading for category listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "🖥️ Web",
            Self::App => "💫 Apps",
            Self::Commerce => "Commercial",
            Self::Personal => "👨‍💻 Personal",
            Self::Toy => "🔫 Toys",
            Self::Other => "🗃️ Other",
        }
    }
}

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display title.
    pub title: String,
    /// Short display description.
    pub description: String,
    /// Optional preview image reference.
    pub preview: Option<String>,
    /// Live site URL. Authored data uses a blank placeholder when no live
    /// site exists; use [`Project::live_site`] instead of reading this raw.
    pub website: String,
    /// Source code URL; `None` means no public source.
    pub source: Option<String>,
    /// Registry keys of the tags attached to this project. Never empty in a
    /// validated catalog.
    pub tags: Vec<String>,
    /// Serialized as `type` to match the authored data schema.
    #[serde(rename = "type")]
    pub kind: ProjectType,
}

impl Project {
    /// Returns the live site URL, treating blank placeholders as absent.
    pub fn live_site(&self) -> Option<&str> {
        let trimmed = self.website.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
