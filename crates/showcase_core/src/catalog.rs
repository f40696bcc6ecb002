//! Catalog of tags and showcase projects.
//!
//! # Responsibility
//! - Hold the canonical tag registry and project list, validated once.
//! - Derive the category grouping used by listing views.
//! - Expose tag lookup and the ordered tag-key sequence.
//!
//! # Invariants
//! - Every tag key referenced by a project exists in the registry;
//!   construction fails fast otherwise, never yielding a partial catalog.
//! - Registry key order and project order are the authored orders and are
//!   stable across calls.
//! - A constructed catalog is immutable; reloading means building a new
//!   catalog and swapping the whole value.

use crate::model::project::{Project, ProjectType};
use crate::model::tag::Tag;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid color regex"));

/// Result type used by catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Authored-data defect detected while constructing a catalog.
///
/// Fatal to the construction step; the surrounding application must not
/// proceed with a partially valid catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// Two registry entries declare the same key.
    DuplicateTagKey(String),
    /// A registry entry's color is not a `#rrggbb`/`#rrggbbaa` hex value.
    InvalidTagColor { tag_key: String, color: String },
    /// A project declares no tags at all.
    EmptyTagSet { project: String },
    /// A project references a tag key absent from the registry.
    UnknownTagReference { project: String, tag_key: String },
}

impl Display for DataIntegrityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTagKey(key) => write!(f, "duplicate tag key in registry: `{key}`"),
            Self::InvalidTagColor { tag_key, color } => {
                write!(f, "tag `{tag_key}` has invalid color `{color}`")
            }
            Self::EmptyTagSet { project } => {
                write!(f, "project `{project}` declares no tags")
            }
            Self::UnknownTagReference { project, tag_key } => {
                write!(f, "project `{project}` references unknown tag `{tag_key}`")
            }
        }
    }
}

impl Error for DataIntegrityError {}

/// Errors from catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Construction-time validation failure.
    Integrity(DataIntegrityError),
    /// Direct lookup with a key absent from the registry. Recoverable, and
    /// unreachable through project tags thanks to the integrity guard.
    TagNotFound(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integrity(err) => write!(f, "{err}"),
            Self::TagNotFound(key) => write!(f, "tag not found: `{key}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Integrity(err) => Some(err),
            Self::TagNotFound(_) => None,
        }
    }
}

impl From<DataIntegrityError> for CatalogError {
    fn from(value: DataIntegrityError) -> Self {
        Self::Integrity(value)
    }
}

/// Validated, immutable catalog of tags and projects.
///
/// Constructed once at startup and passed by reference to consumers; no
/// operation mutates it, so concurrent readers need no coordination.
#[derive(Debug, Clone)]
pub struct Catalog {
    tags: Vec<Tag>,
    tag_index: HashMap<String, usize>,
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog, validating authored data before anything else can
    /// observe it.
    ///
    /// # Errors
    /// - `DuplicateTagKey` when the registry declares a key twice.
    /// - `InvalidTagColor` when a tag color is not a hex color value.
    /// - `EmptyTagSet` when a project declares no tags.
    /// - `UnknownTagReference` when a project references a key missing from
    ///   the registry.
    pub fn new(tags: Vec<Tag>, projects: Vec<Project>) -> CatalogResult<Self> {
        let mut tag_index = HashMap::with_capacity(tags.len());
        for (position, tag) in tags.iter().enumerate() {
            if tag_index.insert(tag.key.clone(), position).is_some() {
                return Err(DataIntegrityError::DuplicateTagKey(tag.key.clone()).into());
            }
            if !HEX_COLOR_RE.is_match(&tag.color) {
                return Err(DataIntegrityError::InvalidTagColor {
                    tag_key: tag.key.clone(),
                    color: tag.color.clone(),
                }
                .into());
            }
        }

        for project in &projects {
            if project.tags.is_empty() {
                return Err(DataIntegrityError::EmptyTagSet {
                    project: project.title.clone(),
                }
                .into());
            }
            for tag_key in &project.tags {
                if !tag_index.contains_key(tag_key) {
                    return Err(DataIntegrityError::UnknownTagReference {
                        project: project.title.clone(),
                        tag_key: tag_key.clone(),
                    }
                    .into());
                }
            }
        }

        Ok(Self {
            tags,
            tag_index,
            projects,
        })
    }

    /// Returns registry keys in declared order.
    ///
    /// The order is stable across calls and drives tag-listing display.
    pub fn tag_keys(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.key.as_str())
    }

    /// Returns the full registry in declared order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Looks up one tag by registry key.
    ///
    /// # Errors
    /// - `TagNotFound` when `key` is absent from the registry. Callers may
    ///   recover (e.g. render an "unknown tag" placeholder).
    pub fn tag(&self, key: &str) -> CatalogResult<&Tag> {
        self.tag_index
            .get(key)
            .map(|position| &self.tags[*position])
            .ok_or_else(|| CatalogError::TagNotFound(key.to_string()))
    }

    /// Returns the authored project list in declared order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Groups this catalog's projects by category.
    pub fn group_by_type(&self) -> ProjectGroups<'_> {
        ProjectGroups::from_projects(&self.projects)
    }
}

/// Read-only category grouping derived from a project sequence.
///
/// Key order is first-encounter order in the source list; categories with no
/// projects are absent, not present with empty groups.
#[derive(Debug, Clone)]
pub struct ProjectGroups<'a> {
    order: Vec<ProjectType>,
    groups: HashMap<ProjectType, Vec<&'a Project>>,
}

impl<'a> ProjectGroups<'a> {
    /// Single left-to-right fold over `projects`: each project is appended
    /// to its category's group, creating the group on first encounter.
    ///
    /// Never fails; intra-group order equals relative input order.
    pub fn from_projects(projects: &'a [Project]) -> Self {
        let mut order = Vec::new();
        let mut groups: HashMap<ProjectType, Vec<&'a Project>> = HashMap::new();
        for project in projects {
            let group = groups.entry(project.kind).or_insert_with(|| {
                order.push(project.kind);
                Vec::new()
            });
            group.push(project);
        }
        Self { order, groups }
    }

    /// Categories with at least one project, in first-encounter order.
    pub fn types(&self) -> &[ProjectType] {
        &self.order
    }

    /// Returns one category's projects, or `None` when the category has no
    /// projects in the source list.
    pub fn get(&self, kind: ProjectType) -> Option<&[&'a Project]> {
        self.groups.get(&kind).map(Vec::as_slice)
    }

    /// Iterates groups in first-encounter category order.
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (ProjectType, &'s [&'a Project])> + 's {
        self.order
            .iter()
            .map(move |kind| (*kind, self.groups[kind].as_slice()))
    }

    /// Number of categories that have at least one project.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the source list was empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total project count across all groups. Equals the source list length
    /// because grouping neither drops nor duplicates projects.
    pub fn total_projects(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
