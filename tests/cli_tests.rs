//! Binary-level checks: argument surface and failure exit codes.
//!
//! These tests never reach AWS — they stop at argument parsing or at the
//! deployment-status step, which is pointed at stand-in binaries via
//! `SHIPSHAPE_WAYPOINT_BIN`.

use std::io::Write;
use std::os::unix::fs::PermissionsExt;

use assert_cmd::Command;
use predicates::prelude::*;

fn shipshape() -> Command {
    Command::cargo_bin("shipshape").expect("binary built")
}

/// Write an executable shell script and return its tempdir + path.
fn fake_waypoint(script: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("waypoint");
    let mut file = std::fs::File::create(&path).expect("create script");
    writeln!(file, "#!/bin/sh").unwrap();
    writeln!(file, "{script}").unwrap();
    drop(file);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    (dir, path)
}

#[test]
fn help_lists_both_operations() {
    shipshape()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wait").and(predicate::str::contains("prune")));
}

#[test]
fn wait_requires_app_and_project() {
    shipshape().arg("wait").assert().code(2);
}

#[test]
fn prune_requires_an_environment() {
    shipshape()
        .args(["prune", "--app", "web", "--project", "shop"])
        .assert()
        .code(2);
}

#[test]
fn failing_status_command_exits_nonzero() {
    shipshape()
        .args(["wait", "--app", "web", "--project", "shop", "--cluster", "apps"])
        .env("SHIPSHAPE_WAYPOINT_BIN", "false")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("waypoint status"));
}

#[test]
fn status_output_without_json_exits_nonzero() {
    let (_dir, path) = fake_waypoint("echo 'no deployments for this app'");

    shipshape()
        .args(["wait", "--app", "web", "--project", "shop", "--cluster", "apps"])
        .env("SHIPSHAPE_WAYPOINT_BIN", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no JSON object"));
}

#[test]
fn status_report_without_a_service_resource_exits_nonzero() {
    let (_dir, path) = fake_waypoint(
        r#"echo 'Current status for app...'; echo '{"DeploymentResourcesSummary": []}'"#,
    );

    shipshape()
        .args(["prune", "--app", "web", "--project", "shop", "--environment", "prod"])
        .env("SHIPSHAPE_WAYPOINT_BIN", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}
