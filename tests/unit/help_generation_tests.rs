//! Help document generation through the public API.

use anyhow::Result;
use tracing::Level;

use initializr_help::documentation::{
    BuildSystemHelpDocumentCustomizer, HelpDocument, HelpDocumentContributor, HelpDocumentCustomizer,
    RequestedDependenciesHelpDocumentCustomizer,
};
use initializr_help::metadata::{InitializrMetadata, Link};
use initializr_help::project::{BuildSystem, ProjectDescription};
use initializr_help::templating::TemplateRenderer;
use initializr_help::test_utils::{
    MetadataTestBuilder, SAMPLE_CATALOG, create_dependency, init_test_logging,
};

#[test]
fn sample_catalog_produces_expected_help() -> Result<()> {
    init_test_logging(Some(Level::DEBUG));
    let metadata = InitializrMetadata::from_toml_str(SAMPLE_CATALOG, "sample")?;
    let description = ProjectDescription::new()
        .with_dependencies(["web", "actuator", "flyway"])
        .with_platform_version("3.3.1");

    let mut document = HelpDocument::new();
    RequestedDependenciesHelpDocumentCustomizer::new(&description, &metadata).customize(&mut document);

    let rendered = document.render(&TemplateRenderer::new()?)?;
    assert_eq!(
        rendered,
        "# Getting Started\n\
         \n\
         ### Reference Documentation\n\
         For further reference, please consider the following sections:\n\
         \n\
         * [Spring Web](https://docs.spring.io/spring-boot/3.3.1/reference/web/servlet.html)\n\
         \n\
         ### Guides\n\
         The following guides illustrate how to use some features concretely:\n\
         \n\
         * [Building a RESTful Web Service](https://spring.io/guides/gs/rest-service/)\n\
         \n\
         ### Additional Links\n\
         These additional references should also help you:\n\
         \n\
         * [Flyway Migration](https://flywaydb.org)\n\
         \n"
    );
    Ok(())
}

#[test]
fn contributor_writes_nothing_for_empty_document() -> Result<()> {
    let mut builder = MetadataTestBuilder::new();
    builder.add_dependency_group(
        "test",
        [create_dependency(
            "example",
            [Link::create("guide", "https://example.com/1"), Link::create("guide", "https://example.com/2")],
        )],
    );
    let metadata = builder.build();
    let description = ProjectDescription::new().with_dependencies(["example"]);
    let renderer = TemplateRenderer::new()?;

    let temp = tempfile::tempdir()?;
    let written = HelpDocumentContributor::new(&renderer)
        .with_customizer(RequestedDependenciesHelpDocumentCustomizer::new(&description, &metadata))
        .contribute(temp.path())?;

    assert!(written.is_none());
    assert!(!temp.path().join("HELP.md").exists());
    Ok(())
}

#[test]
fn contributor_applies_customizers_in_order() -> Result<()> {
    let mut builder = MetadataTestBuilder::new();
    builder.add_dependency_group(
        "test",
        [create_dependency(
            "example",
            [Link::with_description("reference", "https://example.com/doc", "Example doc")],
        )],
    );
    let metadata = builder.build();
    let description = ProjectDescription::new()
        .with_dependencies(["example"])
        .with_build_system(BuildSystem::Maven);
    let renderer = TemplateRenderer::new()?;

    let temp = tempfile::tempdir()?;
    let project = temp.path().join("project");
    let written = HelpDocumentContributor::new(&renderer)
        .with_customizer(BuildSystemHelpDocumentCustomizer::new(&description))
        .with_customizer(RequestedDependenciesHelpDocumentCustomizer::new(&description, &metadata))
        .with_customizer(|document: &mut HelpDocument| {
            document.next_steps_mut().add_item("Run ./mvnw spring-boot:run".to_string());
        })
        .contribute(&project)?;

    let path = written.expect("HELP.md should be written");
    assert_eq!(path, project.join("HELP.md"));

    let help = std::fs::read_to_string(path)?;
    let maven = help.find("Official Apache Maven documentation").unwrap();
    let example = help.find("[Example doc](https://example.com/doc)").unwrap();
    assert!(maven < example);
    assert!(help.ends_with("# Next Steps\n\n* Run ./mvnw spring-boot:run\n\n"));
    Ok(())
}

#[test]
fn unknown_dependencies_are_ignored_by_customizer() -> Result<()> {
    let metadata = InitializrMetadata::from_toml_str(SAMPLE_CATALOG, "sample")?;
    let description = ProjectDescription::new().with_dependencies(["not-there"]);

    let resolved = description.resolve(&metadata);
    assert_eq!(resolved.unknown, vec!["not-there".to_string()]);
    assert!(description.validate(&metadata).is_err());

    let mut document = HelpDocument::new();
    RequestedDependenciesHelpDocumentCustomizer::new(&description, &metadata).customize(&mut document);
    assert!(document.is_empty());
    Ok(())
}
