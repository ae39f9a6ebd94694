use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("failed to create dirs");
    fs::write(path, contents).expect("failed to write file");
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn apiscout(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("apiscout"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("APISCOUT_FORMAT")
        .env_remove("APISCOUT_API_FOLDER")
        .env_remove("APISCOUT_DEST_FOLDER_PATH")
        .env_remove("RUST_LOG");
    cmd
}

/// apis/@v1 and apis/@v2 hold the same API, apis/cats holds a second one.
fn versioned_repo(root: &Path) {
    write(
        &root.join("apis/petstore/@v1/openapi.yaml"),
        "openapi: 3.1.0\ninfo:\n  title: Petstore\n  x-metadata:\n    team: teamA\n",
    );
    write(
        &root.join("apis/petstore/@v2/openapi.yaml"),
        "openapi: 3.1.0\ninfo:\n  title: Petstore\n  x-metadata:\n    team: teamA\n",
    );
    write(
        &root.join("apis/cats/openapi.json"),
        r#"{"openapi": "3.0.0", "info": {"title": "Cats", "x-metadata": {"team": "teamB"}}}"#,
    );
    write(&root.join("apis/README.md"), "# APIs\n");
}

#[test]
fn discover_lists_definitions_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    versioned_repo(repo.path());
    let config = write_config(&home, "api_folder: /apis\n");

    let assert = apiscout(&config)
        .arg("discover")
        .arg(repo.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let output: serde_json::Value = serde_json::from_str(&stdout)?;
    let rows = output["data"].as_array().expect("data array");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["path"], "apis/cats/openapi.json");
    assert_eq!(rows[0]["title"], "Cats");
    assert_eq!(rows[1]["path"], "apis/petstore/@v1/openapi.yaml");
    assert_eq!(rows[2]["path"], "apis/petstore/@v2/openapi.yaml");
    assert_eq!(output["meta"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(output["meta"]["count"], 3);

    Ok(())
}

#[test]
fn targets_collapse_version_folders() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    versioned_repo(repo.path());
    let config = write_config(&home, "api_folder: /apis\n");

    let assert = apiscout(&config)
        .args(["targets", "--repo-id", "svc", "--format", "json"])
        .arg(repo.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let output: serde_json::Value = serde_json::from_str(&stdout)?;
    let rows = output["data"].as_array().expect("data array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["source"], "apis/cats");
    assert_eq!(rows[0]["type"], "folder");
    assert_eq!(rows[0]["destination"], "apis/teamB/svc/Cats/@latest");
    assert_eq!(rows[1]["source"], "apis/petstore");
    assert_eq!(rows[1]["versioned"], true);
    assert_eq!(rows[1]["destination"], "apis/teamA/svc/Petstore");

    Ok(())
}

#[test]
fn targets_files_lists_folder_contents() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    versioned_repo(repo.path());
    let config = write_config(&home, "api_folder: /apis\n");

    apiscout(&config)
        .args(["targets", "--files", "--repo-id", "svc"])
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Petstore/@v1/openapi.yaml"))
        .stdout(predicate::str::contains("Cats/@latest/openapi.json"));

    Ok(())
}

#[test]
fn missing_api_folder_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    let config = write_config(&home, "api_folder: /specs\n");

    apiscout(&config)
        .arg("discover")
        .arg(repo.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("APIs folder `/specs` not found"))
        .stdout(predicate::str::contains("Nothing found."));

    Ok(())
}

#[test]
fn validate_fails_on_missing_metadata_variable() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    versioned_repo(repo.path());
    let config = write_config(
        &home,
        "api_folder: /apis\ndest_folder_path: apis/{metadata.owner}/{title}\n",
    );

    apiscout(&config)
        .args(["validate", "--commit-sha", "ae10er"])
        .arg(repo.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Commit: ae10er"))
        .stdout(predicate::str::contains("metadata attribute is required"))
        .stderr(predicate::str::contains("Metadata validation failed"));

    Ok(())
}

#[test]
fn validate_requires_definitions_when_configured() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    write(&repo.path().join("docs/README.md"), "# nothing here\n");
    let config = write_config(&home, "metadata_required: true\n");

    apiscout(&config)
        .arg("validate")
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("redocly.yaml file not found"));

    Ok(())
}

#[test]
fn validate_succeeds_with_complete_metadata() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    versioned_repo(repo.path());
    let config = write_config(&home, "api_folder: /apis\n");

    apiscout(&config)
        .arg("validate")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata validation successful"));

    Ok(())
}

#[test]
fn invalid_destination_template_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;
    let config = write_config(&home, "{}\n");

    apiscout(&config)
        .args(["targets", "--dest-path", "apis/{branch}/{title}"])
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch"));

    Ok(())
}

#[test]
fn explicit_missing_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let home = tempdir()?;

    apiscout(&home.path().join("absent.yaml"))
        .arg("discover")
        .arg(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));

    Ok(())
}

#[test]
fn version_prints_package_version() {
    Command::new(assert_cmd::cargo::cargo_bin!("apiscout"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
