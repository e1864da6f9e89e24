use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".consent-dashboard").join("config.json")
}

const BINARY_NAME: &str = "consent-dashboard";

fn cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let home = temp_home_dir();
    cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage").and(contains("list")).and(contains("reset-config")));
}

#[test]
fn list_prints_sample_consents() {
    let home = temp_home_dir();
    cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("Showing 4 of 4 consents")
                .and(contains("Zerodha"))
                .and(contains("Apollo Hospitals")),
        );
}

#[test]
/// Status filter drops the expired Zerodha consent.
fn list_filters_by_status() {
    let home = temp_home_dir();
    cmd(&home)
        .args(["list", "--status", "active"])
        .assert()
        .success()
        .stdout(contains("Showing 2 of 4 consents").and(contains("Zerodha").not()));
}

#[test]
fn list_rejects_unknown_status() {
    let home = temp_home_dir();
    cmd(&home)
        .args(["list", "--status", "archived"])
        .assert()
        .failure();
}

#[test]
fn list_json_outputs_records() {
    let home = temp_home_dir();
    let output = cmd(&home)
        .args(["list", "--json", "--risk", "high"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["organization"], "Apollo Hospitals");
}

#[test]
fn stats_prints_counters() {
    let home = temp_home_dir();
    cmd(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(
            contains("Total Consents: 4")
                .and(contains("High Risk: 1"))
                .and(contains("Total Access: 25")),
        );
}

#[test]
fn list_in_hindi() {
    let home = temp_home_dir();
    cmd(&home)
        .args(["list", "--lang", "hi"])
        .assert()
        .success()
        .stdout(contains("सक्रिय"));
}

#[test]
/// The saved language applies to later commands.
fn set_language_writes_config() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    cmd(&home)
        .args(["set-language", "hi"])
        .assert()
        .success()
        .stdout(contains("Language saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"hi\""));

    cmd(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("कुल सहमतियाँ: 4"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_config_deletes_config_file() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    cmd(&home)
        .arg("reset-config")
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    assert!(!config_path.exists());
}

#[test]
fn reset_config_without_file_warns() {
    let home = temp_home_dir();
    cmd(&home)
        .arg("reset-config")
        .assert()
        .success()
        .stdout(contains("Nothing to reset"));
}

#[test]
fn data_file_replaces_sample_data() {
    let home = temp_home_dir();
    let data = home.path().join("consents.json");
    fs::write(
        &data,
        r#"[{
            "id": "a1",
            "connectionType": "Academic",
            "hostUser": "Meera",
            "hostLocker": "NIT-Trichy",
            "guestLocker": "Scholarships",
            "dataTypes": ["Identity"],
            "createdOn": "05/12/2024 10:34:28",
            "validityOn": "20/12/2024 18:30:00",
            "expiryDate": "01/05/2025 23:59:59",
            "status": "active",
            "permissions": ["read"],
            "accessCount": 3,
            "riskLevel": "medium",
            "organization": "Scholarship Board",
            "purpose": "Scholarship Review"
        }]"#,
    )
    .unwrap();

    cmd(&home)
        .arg("list")
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(contains("Showing 1 of 1 consents").and(contains("Scholarship Board")));
}

#[test]
fn bad_data_file_fails() {
    let home = temp_home_dir();
    let data = home.path().join("broken.json");
    fs::write(&data, "not json").unwrap();

    cmd(&home)
        .arg("stats")
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .stderr(contains("Error"));
}
