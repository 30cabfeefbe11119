use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn larder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("larder").expect("Failed to find larder binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_default_lists_seed_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    larder_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 3. Orange"))
        .stdout(predicate::str::contains("Riche en vitamine C"))
        .stdout(predicate::str::contains("## 1. Pomme"));
}

#[test]
fn test_cli_add_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    larder_cmd()
        .args(["--database-file", db_arg, "item", "add", "Kiwi", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added item 'Kiwi'"));

    larder_cmd()
        .args(["--database-file", db_arg, "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## 4. Kiwi"))
        .stdout(predicate::str::contains("- Quantity: 5"));
}

#[test]
fn test_cli_add_item_with_description() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    larder_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "add",
            "Mangue",
            "2",
            "--description",
            "Bien mûre",
        ])
        .assert()
        .success();

    larder_cmd()
        .args(["--database-file", db_arg, "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Description: Bien mûre"));
}

#[test]
fn test_cli_add_item_rejects_non_numeric_quantity() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    larder_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "item",
            "add",
            "Kiwi",
            "five",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let output = larder_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "item",
            "list",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: serde_json::Value =
        serde_json::from_slice(&output).expect("Output should be valid JSON");
    let items = items.as_array().expect("Output should be an array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Orange");
    assert_eq!(items[0]["description"], "Riche en vitamine C");
}

#[test]
fn test_cli_delete_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    larder_cmd()
        .args(["--database-file", db_arg, "item", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deleted item 2"));

    larder_cmd()
        .args(["--database-file", db_arg, "item", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notice: No item with ID 2"));

    larder_cmd()
        .args(["--database-file", db_arg, "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Banane").not());
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    larder_cmd()
        .args(["--database-file", db_arg, "item", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    larder_cmd()
        .args(["--database-file", db_arg, "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomme"));
}

#[test]
fn test_cli_clear_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    larder_cmd()
        .args(["--database-file", db_arg, "item", "clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: All items deleted"));

    larder_cmd()
        .args(["--database-file", db_arg, "item", "clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notice: No items to delete"));

    larder_cmd()
        .args(["--database-file", db_arg, "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_schema_status() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    larder_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schema",
            "status",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Current version: 1"))
        .stdout(predicate::str::contains("- v0 applied"))
        .stdout(predicate::str::contains("- v1 applied"));
}

#[test]
fn test_cli_schema_status_after_reopen_is_up_to_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    larder_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .success();

    larder_cmd()
        .args(["--database-file", db_arg, "schema", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: up to date"));
}

#[test]
fn test_cli_unopenable_database_fails() {
    let temp_dir = create_cli_test_environment();
    // A directory cannot be opened as a database file
    let db_arg = temp_dir.path().to_str().unwrap();

    larder_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize database"));
}
