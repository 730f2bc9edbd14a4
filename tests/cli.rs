//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storeops() -> Command {
    Command::cargo_bin("storeops").unwrap()
}

#[test]
fn test_help() {
    storeops()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("storefront"));
}

#[test]
fn test_version() {
    storeops()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storeops"));
}

#[test]
fn test_status_without_credentials() {
    let home = TempDir::new().unwrap();

    storeops()
        .env("HOME", home.path())
        .env_remove("XDG_CACHE_HOME")
        .env("STOREOPS_API_URL", "http://127.0.0.1:9")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_missing_api_url_is_reported() {
    let home = TempDir::new().unwrap();

    storeops()
        .env("HOME", home.path())
        .env_remove("XDG_CACHE_HOME")
        .env_remove("STOREOPS_API_URL")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("STOREOPS_API_URL"));
}

#[test]
fn test_unreachable_api_is_a_network_error() {
    let home = TempDir::new().unwrap();

    storeops()
        .env("HOME", home.path())
        .env_remove("XDG_CACHE_HOME")
        .env("STOREOPS_API_URL", "http://127.0.0.1:9")
        .args(["category", "list", "--no-cache"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}
