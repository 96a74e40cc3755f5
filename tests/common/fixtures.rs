//! Test fixtures - release listings and mock download links.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REPO: &str = "vaticle/typedb";

/// Assets of a current release: split linux and mac, generic windows.
pub const FULL_ASSETS: &[&str] = &[
    "typedb-all-linux-arm64-2.28.0.tar.gz",
    "typedb-all-linux-x86_64-2.28.0.tar.gz",
    "typedb-all-mac-arm64-2.28.0.zip",
    "typedb-all-mac-x86_64-2.28.0.zip",
    "typedb-all-windows-2.28.0.zip",
    "typedb-console-linux-2.28.0.tar.gz",
];

/// Assets of an older release: one generic bundle per OS.
pub const LEGACY_ASSETS: &[&str] = &[
    "typedb-all-linux-2.0.0.tar.gz",
    "typedb-all-mac-2.0.0.zip",
    "typedb-all-windows-2.0.0.zip",
];

pub fn download_path(tag: &str, file: &str) -> String {
    format!("/{}/releases/download/{}/{}", REPO, tag, file)
}

pub fn download_url(base: &str, tag: &str, file: &str) -> String {
    format!("{}{}", base, download_path(tag, file))
}

/// One release object as the GitHub API returns it, with a few extra fields.
pub fn release_json(base: &str, name: &str, tag: &str, files: &[&str]) -> Value {
    let assets: Vec<Value> = files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            json!({
                "id": i,
                "name": file,
                "content_type": "application/octet-stream",
                "browser_download_url": download_url(base, tag, file),
            })
        })
        .collect();

    json!({
        "name": name,
        "tag_name": tag,
        "html_url": format!("https://github.com/{}/releases/tag/{}", REPO, tag),
        "draft": false,
        "prerelease": false,
        "assets": assets,
    })
}

/// Serve `releases` from the listing endpoint, expecting exactly one call.
pub async fn mount_listing(server: &MockServer, releases: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/releases", REPO)))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(releases))
        .expect(1)
        .mount(server)
        .await;
}

/// Make every listed download answer HEAD with 200, except `broken` (404).
///
/// Downloads that are not mounted at all also answer 404.
pub async fn mount_downloads(server: &MockServer, tag: &str, files: &[&str], broken: &[&str]) {
    for file in files {
        let status = if broken.contains(file) { 404 } else { 200 };
        Mock::given(method("HEAD"))
            .and(path(download_path(tag, file)))
            .respond_with(ResponseTemplate::new(status))
            .mount(server)
            .await;
    }
}
