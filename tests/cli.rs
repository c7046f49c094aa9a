use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn list_templates_prints_catalog_in_order() {
    let out = Command::cargo_bin("intentDemo")
        .unwrap()
        .arg("--list-templates")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let names: Vec<&str> = text.lines().map(|l| l.split('\t').next().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "Deploy React → Render (demo)",
            "Daily scrape → Firestore (demo)",
            "PDF → JSON (demo)",
        ]
    );
}

#[test]
fn list_templates_json() {
    Command::cargo_bin("intentDemo")
        .unwrap()
        .args(["--list-templates", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"intent\": \"Scrape example.com daily and store titles in Firestore\"",
        ));
}

#[test]
fn json_without_list_is_rejected() {
    Command::cargo_bin("intentDemo")
        .unwrap()
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--list-templates"));
}

#[test]
fn settings_loading_is_logged_to_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.toml");
    std::fs::write(&config, "tick_ms = \"fast\"\n").unwrap();
    let log = dir.path().join("logs").join("run.log");

    // A malformed file fails before the terminal is touched.
    Command::cargo_bin("intentDemo")
        .unwrap()
        .env("RUST_LOG", "debug")
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading settings"));

    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("loading settings from"), "log was: {text}");
}
