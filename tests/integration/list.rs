use predicates::prelude::*;

use super::CatalogFixture;

#[test]
fn test_list_text() {
    let fixture = CatalogFixture::sample();

    fixture
        .command()
        .args(["list", "--catalog"])
        .arg(&fixture.catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Web"))
        .stdout(predicate::str::contains("reference: 1, guide: 1, other: 0"))
        .stdout(predicate::str::contains("flyway"));
}

#[test]
fn test_list_json() {
    let fixture = CatalogFixture::sample();

    let output = fixture
        .command()
        .args(["list", "--format", "json", "--catalog"])
        .arg(&fixture.catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = summaries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["id"], "actuator");
    assert_eq!(entries[1]["guide"], 2);
    assert_eq!(entries[2]["group"], "SQL");
}
