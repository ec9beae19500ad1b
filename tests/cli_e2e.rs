//! End-to-end CLI tests for the ietfdata binary.

#![allow(deprecated)]

mod support;

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use support::fixtures::{RFC_INDEX, group, page, person};
use support::socket_guard::start_mock_server_or_skip;

/// A command isolated from the user's own config file.
fn ietfdata(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ietfdata").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_help_displays_usage() {
    let home = TempDir::new().unwrap();
    ietfdata(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Query the IETF Datatracker"))
        .stdout(predicate::str::contains("rfc-index"));
}

#[test]
fn test_binary_version_displays_version() {
    let home = TempDir::new().unwrap();
    ietfdata(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ietfdata"));
}

#[test]
fn test_binary_invalid_flag_returns_error() {
    let home = TempDir::new().unwrap();
    ietfdata(home.path())
        .args(["--invalid-flag", "group", "quic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_binary_rejects_bad_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "concurrency = 4\n").unwrap();

    ietfdata(home.path())
        .arg("--config")
        .arg(&config)
        .args(["group", "quic"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[tokio::test]
async fn test_binary_prints_person_as_json_line() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/v1/person/person/20209/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person(20209, "Colin Perkins")))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let output = ietfdata(home.path())
        .args(["--base-url", &server.uri(), "person", "20209"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["name"], "Colin Perkins");
    assert_eq!(record["resource_uri"], "/api/v1/person/person/20209/");
}

#[tokio::test]
async fn test_binary_missing_record_exits_one() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    ietfdata(home.path())
        .args(["--base-url", &server.uri(), "-q", "person", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No person 1 found"));
}

#[tokio::test]
async fn test_binary_server_error_exits_one_naming_url() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    ietfdata(home.path())
        .args(["--base-url", &server.uri(), "-q", "group", "quic"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HTTP 403"))
        .stderr(predicate::str::contains("/api/v1/group/group/"));
}

#[tokio::test]
async fn test_binary_people_limit_stops_early() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/v1/person/person/"))
        .and(query_param("name__contains", "Perkins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![person(1, "A Perkins"), person(2, "B Perkins"), person(3, "C Perkins")],
            Some("/api/v1/person/person/?limit=100&offset=100&name__contains=Perkins"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let output = ietfdata(home.path())
        .args([
            "--base-url",
            &server.uri(),
            "people",
            "--name-contains",
            "Perkins",
            "--limit",
            "2",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 2);
}

#[tokio::test]
async fn test_binary_reads_base_url_from_config_file() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/v1/group/group/"))
        .and(query_param("acronym", "quic"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![group(2161, "quic")], None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("ietfdata");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("base_url = \"{}\"\nverbosity = \"quiet\"\n", server.uri()),
    )
    .unwrap();

    ietfdata(home.path())
        .args(["group", "quic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"acronym\":\"quic\""));
}

#[tokio::test]
async fn test_binary_rfc_index_entry() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/rfc-index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RFC_INDEX))
        .mount(&server)
        .await;

    let url = format!("{}/rfc-index.xml", server.uri());
    let home = TempDir::new().unwrap();
    ietfdata(home.path())
        .args(["rfc-index", "--url", &url, "--entry", "rfc2119"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"doc_id\":\"RFC2119\""));

    ietfdata(home.path())
        .args(["rfc-index", "--url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rfc\":1"))
        .stdout(predicate::str::contains("\"bcp\":1"));
}
