use predicates::prelude::*;

use super::CatalogFixture;

#[test]
fn test_generate_writes_help_document() {
    let fixture = CatalogFixture::sample();
    let project = fixture.dir.path().join("demo");

    fixture
        .command()
        .args(["generate", "--catalog"])
        .arg(&fixture.catalog)
        .args(["-d", "web", "--platform-version", "3.2.0", "--output"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("HELP.md"));

    let help = std::fs::read_to_string(project.join("HELP.md")).unwrap();
    assert!(help.starts_with("# Getting Started\n"));
    assert!(help.contains(
        "* [Spring Web](https://docs.spring.io/spring-boot/3.2.0/reference/web/servlet.html)"
    ));
    assert!(help.contains("* [Building a RESTful Web Service](https://spring.io/guides/gs/rest-service/)"));
    assert!(!help.contains("### Additional Links"));
}

#[test]
fn test_generate_skips_categories_with_several_links() {
    let fixture = CatalogFixture::sample();

    // actuator has two guides and nothing else
    fixture
        .command()
        .args(["generate", "--catalog"])
        .arg(&fixture.catalog)
        .args(["-d", "actuator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not written"));

    assert!(!fixture.dir.path().join("HELP.md").exists());
}

#[test]
fn test_generate_to_stdout_with_build_system() {
    let fixture = CatalogFixture::sample();

    fixture
        .command()
        .args(["generate", "--stdout", "--build", "maven", "--catalog"])
        .arg(&fixture.catalog)
        .args(["-d", "flyway,actuator"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Getting Started"))
        .stdout(predicate::str::contains(
            "* [Official Apache Maven documentation](https://maven.apache.org/guides/index.html)",
        ))
        .stdout(predicate::str::contains("* [Flyway Migration](https://flywaydb.org)"))
        .stdout(predicate::str::contains("### Guides").not());

    assert!(!fixture.dir.path().join("HELP.md").exists());
}

#[test]
fn test_generate_reads_catalog_from_env() {
    let fixture = CatalogFixture::sample();

    fixture
        .command()
        .env("INITIALIZR_HELP_CATALOG", &fixture.catalog)
        .args(["generate", "--stdout", "-d", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Reference Documentation"));
}

#[test]
fn test_generate_unknown_dependency_suggests_close_id() {
    let fixture = CatalogFixture::sample();

    fixture
        .command()
        .args(["generate", "--catalog"])
        .arg(&fixture.catalog)
        .args(["-d", "wbe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dependency 'wbe'"))
        .stderr(predicate::str::contains("Did you mean 'web'?"));
}

#[test]
fn test_generate_missing_catalog() {
    let fixture = CatalogFixture::sample();

    fixture
        .command()
        .args(["generate", "--catalog", "does-not-exist.toml", "-d", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency catalog not found"));
}

#[test]
fn test_generate_invalid_catalog() {
    let fixture = CatalogFixture::with_content(
        "[[groups]]\nname = \"Web\"\n\n[[groups.dependencies]]\nid = \"web\"\n\n[[groups.dependencies.links]]\nrel = \"guide\"\nhref = \"\"\n",
    );

    fixture
        .command()
        .args(["generate", "--catalog"])
        .arg(&fixture.catalog)
        .args(["-d", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no href"));
}

#[test]
fn test_generate_with_template_override() {
    let fixture = CatalogFixture::sample();
    let templates = fixture.dir.path().join("templates");
    std::fs::create_dir_all(templates.join("documentation")).unwrap();
    std::fs::write(
        templates.join("documentation/guides.tera"),
        "## Learn more\n{% for link in items %}- {{ link.description }}: {{ link.href }}\n{% endfor %}",
    )
    .unwrap();

    fixture
        .command()
        .args(["generate", "--stdout", "--catalog"])
        .arg(&fixture.catalog)
        .arg("--templates")
        .arg(&templates)
        .args(["-d", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "## Learn more\n- Building a RESTful Web Service: https://spring.io/guides/gs/rest-service/\n",
        ))
        .stdout(predicate::str::contains("### Reference Documentation"));
}
