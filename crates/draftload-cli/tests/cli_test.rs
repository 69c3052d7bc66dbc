//! Binary-level tests for the draftload CLI
//!
//! Each test points XDG_CONFIG_HOME at a temp dir so a real user config is
//! never read or written.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run(config_home: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_draftload"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start draftload");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_parse_stdin_json() {
    let home = tempdir().unwrap();
    let output = run(
        home.path(),
        &["parse", "-f", "json"],
        "Alice\nTrucking Co\n500\n650\n50\n300\n",
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["driver_name"], "[Alice]");
    assert_eq!(json["driver_rate"], "$500.00");
    assert_eq!(json["margin"]["amount"], "$150.00");
    assert_eq!(json["margin"]["percentage"], "23.1%");
    assert_eq!(json["rate_per_mile"], "$1.43/mi");
}

#[test]
fn test_parse_file_table() {
    let home = tempdir().unwrap();
    let draft = home.path().join("draft.txt");
    std::fs::write(&draft, "Alice\n\n\nTrucking Co\n700\n650\n").unwrap();

    let output = run(home.path(), &["parse", draft.to_str().unwrap()], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Trucking Co]"));
    assert!(stdout.contains("-$50.00 (-7.7%)"));
    assert!(stdout.contains("$0.00/mi"));
}

#[test]
fn test_parse_missing_file_fails() {
    let home = tempdir().unwrap();
    let output = run(home.path(), &["parse", "/nonexistent/draft.txt"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Draft file not found"));
}

#[test]
fn test_live_prints_final_summary() {
    let home = tempdir().unwrap();
    let output = run(
        home.path(),
        &["live", "--debounce-ms", "10", "-f", "json"],
        "Bob\nHaulers\n$1,000\n$1,250\n100\n400\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"rate_per_mile\": \"$2.00/mi\""));
    assert!(stdout.contains("\"percentage\": \"20.0%\""));
}

#[test]
fn test_route_with_zip_file() {
    let home = tempdir().unwrap();
    let zips = home.path().join("zips.csv");
    std::fs::write(
        &zips,
        "75201,Dallas,Texas,-96.8,32.78\n60601,Chicago,Illinois,-87.62,41.88\n",
    )
    .unwrap();

    let output = run(
        home.path(),
        &[
            "route",
            "--pickup",
            "75201",
            "--delivery",
            "60601",
            "--zips",
            zips.to_str().unwrap(),
            "-f",
            "json",
        ],
        "",
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pickup"]["details"]["city"], "Dallas");
    assert_eq!(json["camera_moves"][1]["type"], "fit_bounds");
    assert_eq!(json["initial_view"]["zoom"], 3.0);
}

#[test]
fn test_route_table_shows_initial_view() {
    let home = tempdir().unwrap();
    let zips = home.path().join("zips.csv");
    std::fs::write(&zips, "75201,Dallas,Texas,-96.8,32.78\n").unwrap();

    let output = run(
        home.path(),
        &[
            "route",
            "--pickup",
            "75201",
            "--delivery",
            "",
            "--zips",
            zips.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initial  fly to (-95.7129, 37.0902) zoom 3 over 0 ms"));
    assert!(stdout.contains("Then     fly to (-96.8000, 32.7800) zoom 8 over 1000 ms"));
}

#[test]
fn test_route_without_directory_fails() {
    let home = tempdir().unwrap();
    let output = run(
        home.path(),
        &["route", "--pickup", "75201", "--delivery", "60601"],
        "",
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No ZIP directory configured"));
}

#[test]
fn test_config_set_and_show() {
    let home = tempdir().unwrap();
    let output = run(home.path(), &["config", "--set-debounce-ms", "350"], "");
    assert!(output.status.success());

    let output = run(home.path(), &["config", "--show"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("350 ms"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_config_reset_repairs_corrupt_file() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("draftload");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{ not json").unwrap();

    let output = run(home.path(), &["parse"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse configuration"));

    let output = run(home.path(), &["config", "--reset"], "");
    assert!(output.status.success());

    let output = run(home.path(), &["parse"], "Alice\n");
    assert!(output.status.success());
}
