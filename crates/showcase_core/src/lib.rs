//! Content and taxonomy core for the personal publishing site.
//! This crate is the single source of truth for catalog invariants and
//! author-presentation rules; theming and page assembly live outside.

pub mod catalog;
pub mod data;
pub mod logging;
pub mod model;
pub mod presentation;

pub use catalog::{Catalog, CatalogError, CatalogResult, DataIntegrityError, ProjectGroups};
pub use data::{builtin_catalog, builtin_projects, builtin_tags};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::Author;
pub use model::project::{Project, ProjectType};
pub use model::tag::Tag;
pub use presentation::{merge_images, resolve_layout, LayoutDecision, LayoutMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
