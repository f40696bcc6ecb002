//! Domain model for the site content layer.
//!
//! # Responsibility
//! - Define the canonical data shapes for tags, projects and post authors.
//! - Keep rendering concerns out; these types carry data, views derive from
//!   them via `catalog` and `presentation`.
//!
//! # Invariants
//! - `Tag::key` is the stable identity of a tag across the catalog.
//! - `Project::type` is exactly one value of the closed `ProjectType` set.
//! - `Author` is consumed, never owned: transforms return new records.

pub mod author;
pub mod project;
pub mod tag;
