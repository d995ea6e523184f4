// CLI integration tests for mtf-normalize
// Tests the command-line interface functionality

use std::io::Write;
use std::process::{Command, Stdio};

fn mtf_normalize() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mtf-normalize"));
    // Keep the developer's own config out of the tests
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

/// Test that --help flag shows help message with program description
#[test]
fn test_help_flag_shows_help_message() {
    let output = mtf_normalize()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Help should exit with success");
    assert!(
        stdout.contains("mtf-normalize"),
        "Help should contain program name. Got: {}",
        stdout
    );
    assert!(
        stdout.contains("map") && stdout.contains("era"),
        "Help should list subcommands. Got: {}",
        stdout
    );
}

#[test]
fn test_map_prints_one_token_per_value() {
    let output = mtf_normalize()
        .args(["map", "armor", "Heavy Ferro-Fibrous Armor", "Ferro-Fibrous(Clan)", "???"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "HEAVY_FERRO_FIBROUS\nFERRO_FIBROUS_CLAN\nSTANDARD\n");
}

#[test]
fn test_map_reads_stdin_when_no_values_given() {
    let mut child = mtf_normalize()
        .args(["map", "location"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"Left Arm\nrtc armor\nTurret\n")
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "LEFT_ARM\nCENTER_TORSO_REAR\nTURRET\n");
}

#[test]
fn test_map_json_output() {
    let output = mtf_normalize()
        .args(["map", "engine", "--json", "XL Engine(Clan)"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let record: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("output should be JSON");
    assert_eq!(record["category"], "engine");
    assert_eq!(record["input"], "XL Engine(Clan)");
    assert_eq!(record["token"], "CLAN_XL");
}

#[test]
fn test_map_unknown_category_fails() {
    let output = mtf_normalize()
        .args(["map", "hull", "Standard"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Unknown category should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown category: hull"),
        "Should explain the failure. Got: {}",
        stderr
    );
}

#[test]
fn test_map_with_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.toml");
    std::fs::write(&path, "[aliases.engine]\n\"Lyran XL\" = \"XL\"\n").unwrap();

    let output = mtf_normalize()
        .arg("--config")
        .arg(&path)
        .args(["map", "engine", "Lyran XL", "Lyran Light"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "XL\nLIGHT\n");
}

#[test]
fn test_map_with_invalid_override_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.toml");
    std::fs::write(&path, "[aliases.gyro]\n\"Spinny\" = \"SPINNING\"\n").unwrap();

    let output = mtf_normalize()
        .arg("--config")
        .arg(&path)
        .args(["map", "gyro", "Spinny"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SPINNING"), "Got: {}", stderr);
}

#[test]
fn test_era_command() {
    let output = mtf_normalize()
        .args(["era", "3050"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "CLAN_INVASION\t4-clan-invasion\n"
    );
}

#[test]
fn test_era_command_accepts_negative_year() {
    let output = mtf_normalize()
        .args(["era", "-50"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "EARLY_SPACEFLIGHT\t0-early-spaceflight\n"
    );
}

#[test]
fn test_id_commands() {
    let output = mtf_normalize()
        .args(["id", "Atlas", "AS7-D"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "atlas-as7-d\n");

    let output = mtf_normalize()
        .args(["equipment-id", "Gauss Rifle (Clan)"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "gauss-rifle-clan\n");
}

#[test]
fn test_rules_folder_command() {
    let output = mtf_normalize()
        .args(["rules-folder", "EXPERIMENTAL"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "experimental\n");
}

#[test]
fn test_categories_lists_every_category() {
    let output = mtf_normalize()
        .arg("categories")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "tech-base:",
        "rules-level:",
        "engine:",
        "gyro:",
        "cockpit:",
        "structure:",
        "armor:",
        "heat-sink:",
        "location:",
        "mech-config:",
        "unit-type:",
        "era:",
    ] {
        assert!(stdout.contains(name), "missing {} in {}", name, stdout);
    }
    assert!(stdout.contains("QUADVEE"));
}
