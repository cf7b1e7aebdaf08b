//! Smoke tests for the items-server binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_configuration_flags() {
    let mut cmd = Command::cargo_bin("items-server").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("serverless"));
}

#[test]
fn version_flag() {
    let mut cmd = Command::cargo_bin("items-server").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unreachable_database_exits_non_zero() {
    let mut cmd = Command::cargo_bin("items-server").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["--database-url", "not a url", "--port", "0"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("database unavailable").count(1))
        .stderr(predicate::str::contains("database unavailable").not());
}

#[test]
fn zero_pool_width_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("items-server").unwrap();
    cmd.args(["--database-url", "postgres://db/items", "--max-connections", "0"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("--max-connections"));
}
