use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn taskboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskboard").expect("Failed to find taskboard binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_default_lists_projects() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    taskboard_cmd()
        .current_dir(temp_dir.path())
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));

    assert!(db_path.exists());
}

#[test]
fn test_cli_projects_alias() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    taskboard_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_cli_empty_resources_and_jobs() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    for command in ["resources", "jobs"] {
        taskboard_cmd()
            .args(["--database-file", db_path.to_str().unwrap(), command])
            .assert()
            .success()
            .stdout(predicate::str::contains("No resources found."));
    }
}

#[test]
fn test_cli_init_db() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("nested").join("board.db");

    taskboard_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "init-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized at"));

    assert!(db_path.exists());

    taskboard_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "init-db", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success:"));
}

#[test]
fn test_cli_reads_database_from_config_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("from_config.db");
    let config_path = temp_dir.path().join("settings.json");
    let config = serde_json::json!({ "database": { "name": db_path } });
    std::fs::write(&config_path, config.to_string()).unwrap();

    taskboard_cmd()
        .args(["--config", config_path.to_str().unwrap(), "projects"])
        .assert()
        .success();

    assert!(db_path.exists());
}

#[test]
fn test_cli_picks_up_config_json_in_working_directory() {
    let temp_dir = create_cli_test_environment();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"database": {"name": "projects.db"}}"#,
    )
    .unwrap();

    taskboard_cmd()
        .current_dir(temp_dir.path())
        .arg("resources")
        .assert()
        .success();

    assert!(temp_dir.path().join("projects.db").exists());
}

#[test]
fn test_cli_invalid_config_fails() {
    let temp_dir = create_cli_test_environment();
    let config_path = temp_dir.path().join("broken.json");
    std::fs::write(&config_path, "{ not json").unwrap();

    taskboard_cmd()
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_cli_help_lists_commands() {
    taskboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"))
        .stdout(predicate::str::contains("jobs"));
}
