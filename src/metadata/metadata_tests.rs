use std::collections::BTreeMap;

use crate::core::HelpError;
use crate::metadata::{Dependency, DependencyGroup, InitializrMetadata, Link, LinkCategory};

const CATALOG: &str = r#"
[[groups]]
name = "Web"

[[groups.dependencies]]
id = "web"
name = "Spring Web"
group-id = "org.springframework.boot"
artifact-id = "spring-boot-starter-web"

[[groups.dependencies.links]]
rel = "guide"
href = "https://spring.io/guides/gs/rest-service/"
description = "Building a RESTful Web Service"

[[groups.dependencies.links]]
rel = "reference"
href = "https://docs.spring.io/spring-boot/{bootVersion}/reference/web/servlet.html"

[[groups]]
name = "SQL"

[[groups.dependencies]]
id = "data-jpa"
name = "Spring Data JPA"
group-id = "org.springframework.boot"
artifact-id = "spring-boot-starter-data-jpa"
"#;

#[test]
fn test_link_category_from_rel() {
    assert_eq!(LinkCategory::from_rel("reference"), LinkCategory::Reference);
    assert_eq!(LinkCategory::from_rel("guide"), LinkCategory::Guide);
    assert_eq!(LinkCategory::from_rel("home"), LinkCategory::Other);
    assert_eq!(LinkCategory::from_rel("something"), LinkCategory::Other);
    // rels are matched exactly
    assert_eq!(LinkCategory::from_rel("Reference"), LinkCategory::Other);
    assert_eq!(LinkCategory::from_rel("guides"), LinkCategory::Other);
}

#[test]
fn test_display_name_falls_back_to_id() {
    let dependency = Dependency::with_id("example", "com.example", "example");
    assert_eq!(dependency.display_name(), "example");

    let named = dependency.clone().named("Example Library");
    assert_eq!(named.display_name(), "Example Library");

    let blank = dependency.named("   ");
    assert_eq!(blank.display_name(), "example");
}

#[test]
fn test_links_for_keeps_declaration_order() {
    let dependency = Dependency::with_id("example", "com.example", "example")
        .with_link(Link::create("guide", "https://example.com/1"))
        .with_link(Link::create("reference", "https://example.com/ref"))
        .with_link(Link::create("guide", "https://example.com/2"));

    let guides: Vec<_> = dependency.links_for(LinkCategory::Guide).map(|l| l.href.as_str()).collect();
    assert_eq!(guides, vec!["https://example.com/1", "https://example.com/2"]);
    assert_eq!(dependency.links_for(LinkCategory::Other).count(), 0);
}

#[test]
fn test_blank_link_description_is_ignored() {
    let link = Link::with_description("guide", "https://example.com", "  ");
    assert_eq!(link.description(), None);

    let link = Link::with_description("guide", "https://example.com", "How-to");
    assert_eq!(link.description(), Some("How-to"));
}

#[test]
fn test_expand_known_and_unknown_placeholders() {
    let link = Link::create("reference", "https://docs.example.com/{bootVersion}/{lang}/index.html");
    assert!(link.is_templated());

    let mut variables = BTreeMap::new();
    variables.insert("bootVersion".to_string(), "3.2.0".to_string());
    assert_eq!(link.expand(&variables), "https://docs.example.com/3.2.0/{lang}/index.html");
}

#[test]
fn test_expand_plain_href_is_unchanged() {
    let link = Link::create("reference", "https://example.com/doc");
    assert!(!link.is_templated());
    assert_eq!(link.expand(&BTreeMap::new()), "https://example.com/doc");

    let unbalanced = Link::create("reference", "https://example.com/{oops");
    assert!(!unbalanced.is_templated());
    assert_eq!(unbalanced.expand(&BTreeMap::new()), "https://example.com/{oops");
}

#[test]
fn test_expand_placeholder_inside_doubled_braces() {
    let mut variables = BTreeMap::new();
    variables.insert("bootVersion".to_string(), "3.2.0".to_string());

    let link = Link::create("reference", "https://x/{{bootVersion}/a");
    assert!(link.is_templated());
    assert_eq!(link.expand(&variables), "https://x/{3.2.0/a");

    let doubled = Link::create("reference", "https://x/{{bootVersion}}/a");
    assert_eq!(doubled.expand(&variables), "https://x/{3.2.0}/a");

    let repeated = Link::create("reference", "https://x/{bootVersion}/{bootVersion}");
    assert_eq!(repeated.expand(&variables), "https://x/3.2.0/3.2.0");
}

#[test]
fn test_parse_catalog() {
    let metadata = InitializrMetadata::from_toml_str(CATALOG, "catalog.toml").unwrap();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.groups().len(), 2);

    let web = metadata.get_dependency("web").unwrap();
    assert_eq!(web.display_name(), "Spring Web");
    assert_eq!(web.artifact_id, "spring-boot-starter-web");
    assert_eq!(web.links.len(), 2);
    assert_eq!(web.links[0].description(), Some("Building a RESTful Web Service"));
    assert_eq!(web.links[1].description, None);

    assert!(metadata.contains("data-jpa"));
    assert!(metadata.get_dependency("webflux").is_none());

    let ids: Vec<_> = metadata.dependencies().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["web", "data-jpa"]);
}

#[test]
fn test_parse_invalid_toml() {
    let result = InitializrMetadata::from_toml_str("[[groups]\nname = ", "broken.toml");
    match result {
        Err(HelpError::CatalogParseError {
            file,
            ..
        }) => assert_eq!(file, "broken.toml"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let groups = vec![
        DependencyGroup::new("Web", vec![Dependency::with_id("web", "g", "a")]),
        DependencyGroup::new("Other", vec![Dependency::with_id("web", "g", "b")]),
    ];
    match InitializrMetadata::from_groups(groups) {
        Err(HelpError::DuplicateDependency {
            id,
            first_group,
            second_group,
        }) => {
            assert_eq!(id, "web");
            assert_eq!(first_group, "Web");
            assert_eq!(second_group, "Other");
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn test_blank_href_is_rejected() {
    let groups = vec![DependencyGroup::new(
        "Web",
        vec![Dependency::with_id("web", "g", "a").with_link(Link::create("guide", " "))],
    )];
    let error = InitializrMetadata::from_groups(groups).unwrap_err();
    assert!(matches!(error, HelpError::CatalogValidationError { .. }));
    assert!(error.to_string().contains("'guide' link of dependency 'web' has no href"));
}

#[test]
fn test_blank_id_is_rejected() {
    let groups = vec![DependencyGroup::new("Web", vec![Dependency::with_id("", "g", "a")])];
    let error = InitializrMetadata::from_groups(groups).unwrap_err();
    assert!(error.to_string().contains("without an id in group 'Web'"));
}

#[test]
fn test_load_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let error = InitializrMetadata::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<HelpError>(),
        Some(HelpError::CatalogNotFound { .. })
    ));
}

#[test]
fn test_load_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("catalog.toml");
    std::fs::write(&path, CATALOG).unwrap();

    let metadata = InitializrMetadata::load(&path).unwrap();
    assert!(metadata.contains("web"));
}

#[test]
fn test_suggest_close_ids() {
    let metadata = InitializrMetadata::from_toml_str(CATALOG, "catalog.toml").unwrap();
    assert_eq!(metadata.suggest("wbe"), vec!["web".to_string()]);
    assert_eq!(metadata.suggest("data-jap"), vec!["data-jpa".to_string()]);
    assert!(metadata.suggest("kafka").is_empty());
}
