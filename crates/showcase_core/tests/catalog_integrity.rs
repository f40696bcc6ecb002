use showcase_core::{
    builtin_catalog, builtin_tags, Catalog, CatalogError, DataIntegrityError, Project,
    ProjectType, Tag,
};

fn tagged_project(title: &str, tags: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{title} description"),
        preview: None,
        website: " ".to_string(),
        source: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        kind: ProjectType::Web,
    }
}

#[test]
fn unknown_tag_reference_fails_construction() {
    let error = Catalog::new(
        builtin_tags(),
        vec![tagged_project("broken", &["nonexistent"])],
    )
    .expect_err("unknown tag reference must fail fast");

    assert_eq!(
        error,
        CatalogError::Integrity(DataIntegrityError::UnknownTagReference {
            project: "broken".to_string(),
            tag_key: "nonexistent".to_string(),
        })
    );
}

#[test]
fn empty_tag_set_fails_construction() {
    let error = Catalog::new(builtin_tags(), vec![tagged_project("untagged", &[])])
        .expect_err("projects must declare at least one tag");

    assert!(matches!(
        error,
        CatalogError::Integrity(DataIntegrityError::EmptyTagSet { .. })
    ));
}

#[test]
fn duplicate_registry_key_fails_construction() {
    let mut tags = builtin_tags();
    tags.push(Tag::new("personal", "Personal again", "duplicate", "#123456"));

    let error = Catalog::new(tags, vec![]).expect_err("duplicate keys must fail fast");
    assert_eq!(
        error,
        CatalogError::Integrity(DataIntegrityError::DuplicateTagKey(
            "personal".to_string()
        ))
    );
}

#[test]
fn invalid_tag_color_fails_construction() {
    let mut tags = builtin_tags();
    tags.push(Tag::new("plain", "Plain", "no color", "hotpink"));

    let error = Catalog::new(tags, vec![]).expect_err("non-hex colors must fail fast");
    assert!(matches!(
        error,
        CatalogError::Integrity(DataIntegrityError::InvalidTagColor { .. })
    ));
}

#[test]
fn tag_lookup_hits_registry_entries_and_misses_unknown_keys() {
    let catalog = builtin_catalog().expect("built-in catalog should be valid");

    let design = catalog.tag("design").expect("design tag should exist");
    assert_eq!(design.color, "#a44fb7");

    let miss = catalog
        .tag("nonexistent")
        .expect_err("unknown keys must miss");
    assert_eq!(miss, CatalogError::TagNotFound("nonexistent".to_string()));
}

#[test]
fn tag_keys_are_declared_order_and_stable() {
    let catalog = builtin_catalog().expect("built-in catalog should be valid");

    let first: Vec<&str> = catalog.tag_keys().collect();
    assert_eq!(
        first,
        vec![
            "favorite",
            "opensource",
            "product",
            "design",
            "large",
            "personal"
        ]
    );
    let second: Vec<&str> = catalog.tag_keys().collect();
    assert_eq!(first, second);
}

#[test]
fn every_project_tag_is_reachable_through_tag_keys() {
    let catalog = builtin_catalog().expect("built-in catalog should be valid");
    let keys: Vec<&str> = catalog.tag_keys().collect();

    for project in catalog.projects() {
        assert!(!project.tags.is_empty());
        for tag_key in &project.tags {
            assert!(
                keys.contains(&tag_key.as_str()),
                "project `{}` references `{tag_key}` which is missing from the registry",
                project.title
            );
        }
    }
}

#[test]
fn project_serde_uses_external_schema_field_names() {
    let project = tagged_project("serde", &["personal"]);
    let json = serde_json::to_value(&project).expect("project should serialize");

    assert_eq!(json["type"], "web");
    assert_eq!(json["tags"][0], "personal");

    let back: Project = serde_json::from_value(json).expect("project should deserialize");
    assert_eq!(back, project);
}
