//! Integration tests for a full documentation build
//!
//! The GitHub API and the download host are both served by one mock server.

mod common;

use common::*;
use release_tables::{pipeline, Config, FetchError, HttpClient};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, dir: &TempDir) -> Config {
    Config {
        api_base: server.uri(),
        all_versions_file: dir.path().join("all-versions.adoc"),
        latest_version_file: dir.path().join("latest-version.adoc"),
        ..Config::default()
    }
}

fn read(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn test_full_build_writes_expected_tables() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_listing(
        &server,
        json!([
            release_json(&base, "TypeDB 2.28.0", "2.28.0", FULL_ASSETS),
            release_json(&base, "TypeDB Studio 2.28.0", "studio-2.28.0", &[]),
            release_json(&base, "Grakn Core 1.8.4", "1.8.4", &[]),
            release_json(&base, "TypeDB 2.0.0", "2.0.0", LEGACY_ASSETS),
        ]),
    )
    .await;
    mount_downloads(&server, "2.28.0", FULL_ASSETS, &[]).await;
    mount_downloads(&server, "2.0.0", LEGACY_ASSETS, &[]).await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let client = HttpClient::new(&config);
    let summary = pipeline::run(&config, &client, &client).unwrap();

    assert_eq!(summary.processed, ["2.28.0", "studio-2.28.0", "2.0.0"]);
    assert_eq!(summary.ignored, ["1.8.4"]);
    assert!(summary.failed_urls.is_empty());
    assert!(summary.write_errors.is_empty());

    let url = |tag: &str, file: &str| download_url(&base, tag, file);
    let expected_latest = format!(
        "\n| https://github.com/vaticle/typedb/releases/tag/2.28.0[2.28.0]\n\
| \n// tag::mac[]\n{}[x86_64] / {}[arm64]\n// end::mac[]\n// Check: PASSED PASSED\n\
| \n// tag::lin[]\n{}[x86_64] / {}[arm64]\n// end::lin[]\n// Check: PASSED PASSED\n\
| \n// tag::win[]\n{}[x86_64]\n// end::win[]\n// Check: PASSED\n",
        url("2.28.0", "typedb-all-mac-x86_64-2.28.0.zip"),
        url("2.28.0", "typedb-all-mac-arm64-2.28.0.zip"),
        url("2.28.0", "typedb-all-linux-x86_64-2.28.0.tar.gz"),
        url("2.28.0", "typedb-all-linux-arm64-2.28.0.tar.gz"),
        url("2.28.0", "typedb-all-windows-2.28.0.zip"),
    );
    assert_eq!(read(&config.latest_version_file), expected_latest);

    let all = read(&config.all_versions_file);
    assert!(!all.contains("tag::"));
    let rows: Vec<_> = all.lines().filter(|l| l.contains("/releases/tag/")).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].ends_with("[2.28.0]"));
    assert!(rows[1].ends_with("[studio-2.28.0]"));
    assert!(rows[2].ends_with("[2.0.0]"));
    assert!(all.contains(&format!(
        "| {}[x86_64]\n// Check: PASSED\n",
        url("2.0.0", "typedb-all-linux-2.0.0.tar.gz")
    )));
    // Only the bundled distributions are listed
    assert!(!all.contains("typedb-console"));
}

#[tokio::test]
async fn test_broken_link_marked_and_reported_once() {
    let server = MockServer::start().await;
    let base = server.uri();
    let broken = "typedb-all-linux-arm64-2.28.0.tar.gz";
    mount_listing(
        &server,
        json!([release_json(&base, "TypeDB 2.28.0", "2.28.0", FULL_ASSETS)]),
    )
    .await;
    mount_downloads(&server, "2.28.0", FULL_ASSETS, &[broken]).await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let client = HttpClient::new(&config);
    let summary = pipeline::run(&config, &client, &client).unwrap();

    let broken_url = download_url(&base, "2.28.0", broken);
    assert_eq!(summary.failed_urls, [broken_url.clone()]);
    assert!(summary.has_broken_links());

    for path in [&config.all_versions_file, &config.latest_version_file] {
        let content = read(path);
        assert!(content.contains(&format!(" / {}[arm64]\n", broken_url)));
        assert!(content.contains("// Check: PASSED Fail\n"));
    }
}

#[tokio::test]
async fn test_unmounted_download_fails_validation() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_listing(
        &server,
        json!([release_json(&base, "TypeDB 2.0.0", "2.0.0", &["typedb-all-windows-2.0.0.zip"])]),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let client = HttpClient::new(&config);
    let summary = pipeline::run(&config, &client, &client).unwrap();

    assert_eq!(summary.failed_urls.len(), 1);
    assert!(read(&config.all_versions_file).contains("// Check: Fail\n"));
}

#[tokio::test]
async fn test_rebuild_is_byte_identical() {
    let server = MockServer::start().await;
    let base = server.uri();
    let listing = json!([
        release_json(&base, "TypeDB 2.28.0", "2.28.0", FULL_ASSETS),
        release_json(&base, "TypeDB 2.0.0", "2.0.0", LEGACY_ASSETS),
    ]);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .expect(2)
        .mount(&server)
        .await;
    mount_downloads(&server, "2.28.0", FULL_ASSETS, &[]).await;
    mount_downloads(&server, "2.0.0", LEGACY_ASSETS, &[]).await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let client = HttpClient::new(&config);

    pipeline::run(&config, &client, &client).unwrap();
    let first = (
        std::fs::read(&config.all_versions_file).unwrap(),
        std::fs::read(&config.latest_version_file).unwrap(),
    );
    pipeline::run(&config, &client, &client).unwrap();
    let second = (
        std::fs::read(&config.all_versions_file).unwrap(),
        std::fs::read(&config.latest_version_file).unwrap(),
    );

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_failure_aborts_without_writing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let client = HttpClient::new(&config);
    let err = pipeline::run(&config, &client, &client).unwrap_err();

    assert!(matches!(err.downcast_ref::<FetchError>(), Some(FetchError::NotFound(_))));
    assert!(format!("{:#}", err).contains("vaticle/typedb"));
    assert!(!config.all_versions_file.exists());
    assert!(!config.latest_version_file.exists());
}
