//! Authored catalog data.
//!
//! # Responsibility
//! - Ship the site's built-in tag registry and showcase list as constant,
//!   statically authored data.
//!
//! # Invariants
//! - Declaration order here is display order; reordering entries reorders
//!   the rendered listings.
//! - Data must satisfy the catalog integrity checks; `builtin_catalog`
//!   failing means the authored data itself is broken.

use crate::catalog::{Catalog, CatalogResult};
use crate::model::project::{Project, ProjectType};
use crate::model::tag::Tag;

/// The site's tag registry, in display order.
pub fn builtin_tags() -> Vec<Tag> {
    vec![
        Tag::new(
            "favorite",
            "Favorite",
            "My favorite projects, go take a look!",
            "#e9669e",
        ),
        Tag::new(
            "opensource",
            "Open source",
            "Open source projects are a great source of inspiration!",
            "#39ca30",
        ),
        Tag::new(
            "product",
            "Product",
            "Projects related to a shipped product.",
            "#dfd545",
        ),
        Tag::new(
            "design",
            "Design",
            "Nicely designed sites.",
            "#a44fb7",
        ),
        Tag::new(
            "large",
            "Large",
            "Large projects, with more pages than average.",
            "#8c2f00",
        ),
        Tag::new("personal", "Personal", "Personal projects.", "#12affa"),
    ]
}

/// The authored showcase list, in display order.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Personal blog".to_string(),
            description: "Personal blog built on the Docusaurus static site generator".to_string(),
            preview: Some("/img/project/blog.png".to_string()),
            website: " ".to_string(),
            source: Some("https://github.com/Yang0107-liyyy/blog".to_string()),
            tags: vec![
                "design".to_string(),
                "favorite".to_string(),
                "personal".to_string(),
            ],
            kind: ProjectType::Web,
        },
        Project {
            title: "CoderStation front office".to_string(),
            description: "Front-office management system built with React".to_string(),
            preview: Some("/img/project/coderstation-frontSystem.png".to_string()),
            website: " ".to_string(),
            source: Some(
                "https://github.com/Yang0107-liyyy/coderstation-frontSystem".to_string(),
            ),
            tags: vec!["personal".to_string()],
            kind: ProjectType::Web,
        },
        Project {
            title: "CoderStation back office".to_string(),
            description: "Back-office management system built with dva + umijs 4.x".to_string(),
            preview: Some("/img/project/coderstation-server.png".to_string()),
            website: " ".to_string(),
            source: Some(
                "https://github.com/Yang0107-liyyy/coderstation-backgroundSystem".to_string(),
            ),
            tags: vec!["personal".to_string()],
            kind: ProjectType::Web,
        },
    ]
}

/// Builds and validates the built-in catalog.
///
/// # Errors
/// - Propagates `DataIntegrityError` when the authored data is inconsistent;
///   this is a defect in this module, not a runtime condition.
pub fn builtin_catalog() -> CatalogResult<Catalog> {
    Catalog::new(builtin_tags(), builtin_projects())
}
