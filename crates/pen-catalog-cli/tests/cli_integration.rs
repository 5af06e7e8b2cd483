use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the pen-catalog binary command.
#[allow(deprecated)]
fn pen_catalog() -> Command {
    let mut cmd = Command::cargo_bin("pen-catalog").unwrap();
    cmd.env_remove("PEN_CATALOG_CONFIG")
        .env_remove("PEN_CATALOG_DB_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file into a fresh temp dir.
fn config_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// Help and version tests
// ---------------------------------------------------------------------------

#[test]
fn help_exits_zero() {
    pen_catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pen catalog reference data"));
}

#[test]
fn version_exits_zero() {
    pen_catalog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pen-catalog"));
}

#[test]
fn serve_help() {
    pen_catalog()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start the HTTP server"))
        .stdout(predicate::str::contains("--route-prefix"));
}

#[test]
fn no_subcommand_is_usage_error() {
    pen_catalog().assert().failure().code(2);
}

// ---------------------------------------------------------------------------
// routes
// ---------------------------------------------------------------------------

#[test]
fn routes_plain_lists_every_route() {
    let dir = TempDir::new().unwrap();
    pen_catalog()
        .current_dir(dir.path())
        .args(["--format", "plain", "routes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app_brands\tGET\t/api/brands\tBearer"))
        .stdout(predicate::str::contains(
            "app_type_delete\tDELETE\t/api/type/{id}\t-",
        ));
}

#[test]
fn routes_json_is_an_array_of_twenty() {
    let dir = TempDir::new().unwrap();
    let output = pen_catalog()
        .current_dir(dir.path())
        .args(["--format", "json", "routes"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let routes = json.as_array().unwrap();
    assert_eq!(routes.len(), 20);
    assert_eq!(routes[0]["name"], "app_brands");
    assert_eq!(routes[0]["security"], "Bearer");
    assert_eq!(routes[3]["methods"], serde_json::json!(["PUT", "PATCH"]));
}

#[test]
fn routes_uses_prefix_from_config() {
    let (_dir, path) = config_file("[catalog]\nroute_prefix = \"/v2\"\n");
    pen_catalog()
        .args(["--format", "plain", "routes", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("/v2/colors"))
        .stdout(predicate::str::contains("/api/").not());
}

#[test]
fn routes_flag_overrides_config_prefix() {
    let (_dir, path) = config_file("[catalog]\nroute_prefix = \"/v2\"\n");
    pen_catalog()
        .arg("--config")
        .arg(&path)
        .args(["--format", "plain", "routes", "--route-prefix", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app_materials\tGET\t/materials\t"));
}

#[test]
fn routes_with_invalid_config_exits_two() {
    let (_dir, path) = config_file("[catalog\nroute_prefix = ");
    pen_catalog()
        .arg("--config")
        .arg(&path)
        .arg("routes")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn routes_with_missing_config_reports_io_error_as_json() {
    pen_catalog()
        .args([
            "--format",
            "json",
            "--config",
            "/nonexistent/pen-catalog.toml",
            "routes",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"io_error\""));
}

// ---------------------------------------------------------------------------
// serve
// ---------------------------------------------------------------------------

#[test]
fn serve_rejects_malformed_log_level() {
    pen_catalog()
        .args(["serve", "--db-url", "memory", "--log-level", "pen_catalog_api=loud"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid log level"));
}

// ---------------------------------------------------------------------------
// completions
// ---------------------------------------------------------------------------

#[test]
fn completions_bash() {
    pen_catalog()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pen-catalog"));
}

#[test]
fn completions_unknown_shell_is_usage_error() {
    pen_catalog()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .code(2);
}
