use showcase_core::{builtin_tags, Catalog, Project, ProjectGroups, ProjectType};

fn project(title: &str, kind: ProjectType) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{title} description"),
        preview: None,
        website: " ".to_string(),
        source: None,
        tags: vec!["personal".to_string()],
        kind,
    }
}

#[test]
fn grouping_preserves_total_count_and_intra_group_order() {
    let projects = vec![
        project("web-1", ProjectType::Web),
        project("toy-1", ProjectType::Toy),
        project("web-2", ProjectType::Web),
        project("app-1", ProjectType::App),
        project("web-3", ProjectType::Web),
    ];

    let groups = ProjectGroups::from_projects(&projects);

    assert_eq!(groups.total_projects(), projects.len());

    let web = groups.get(ProjectType::Web).expect("web group should exist");
    let web_titles: Vec<&str> = web.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(web_titles, vec!["web-1", "web-2", "web-3"]);
}

#[test]
fn group_keys_follow_first_encounter_order() {
    let projects = vec![
        project("toy-1", ProjectType::Toy),
        project("web-1", ProjectType::Web),
        project("toy-2", ProjectType::Toy),
        project("other-1", ProjectType::Other),
    ];

    let groups = ProjectGroups::from_projects(&projects);
    assert_eq!(
        groups.types(),
        &[ProjectType::Toy, ProjectType::Web, ProjectType::Other]
    );
}

#[test]
fn categories_without_projects_are_absent_not_empty() {
    let projects = vec![project("web-1", ProjectType::Web)];
    let groups = ProjectGroups::from_projects(&projects);

    assert_eq!(groups.len(), 1);
    assert!(groups.get(ProjectType::Toy).is_none());
    assert!(groups.get(ProjectType::Commerce).is_none());
}

#[test]
fn empty_project_list_yields_empty_grouping() {
    let groups = ProjectGroups::from_projects(&[]);
    assert!(groups.is_empty());
    assert_eq!(groups.total_projects(), 0);
    assert_eq!(groups.iter().count(), 0);
}

#[test]
fn catalog_grouping_matches_standalone_fold() {
    let projects = vec![
        project("web-1", ProjectType::Web),
        project("app-1", ProjectType::App),
        project("web-2", ProjectType::Web),
    ];
    let catalog =
        Catalog::new(builtin_tags(), projects.clone()).expect("catalog should be valid");

    let groups = catalog.group_by_type();
    assert_eq!(groups.types(), &[ProjectType::Web, ProjectType::App]);
    assert_eq!(groups.total_projects(), projects.len());

    // Grouping is a derived view; repeated derivation is identical.
    let again = catalog.group_by_type();
    assert_eq!(again.types(), groups.types());
}
