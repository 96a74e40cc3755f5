//! GitHub releases: wire types, the listing fetch, and the product filter

use crate::core::config::Config;
use crate::core::output;
use crate::http::{FetchError, HttpClient};
use serde::Deserialize;

/// A GitHub release. Does not contain all fields.
///
/// See the GitHub [docs](https://docs.github.com/en/rest/releases/releases#list-releases).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GithubRelease {
    /// Display name; GitHub sends `null` for releases created without one
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    pub html_url: String,
    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

/// A release's downloadable asset. Does not contain all fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl GithubRelease {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Fetch the most recent releases as raw JSON objects, in API order.
pub fn fetch_raw_releases(
    client: &HttpClient,
    config: &Config,
) -> Result<Vec<serde_json::Value>, FetchError> {
    let json = client.get_github_json(
        &config.releases_url(),
        &[("per_page", config.per_page.to_string())],
        &config.repo,
    )?;

    match json {
        serde_json::Value::Array(items) => Ok(items),
        other => Err(FetchError::Parse(format!(
            "expected a JSON array of releases, got {}",
            json_kind(&other)
        ))),
    }
}

/// Fetch the most recent releases, in API order.
pub fn fetch_releases(client: &HttpClient, config: &Config) -> Result<Vec<GithubRelease>, FetchError> {
    let raw = fetch_raw_releases(client, config)?;
    serde_json::from_value(serde_json::Value::Array(raw)).map_err(|e| FetchError::Parse(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Releases split by whether their name carries the product name.
#[derive(Debug, Default)]
pub struct Selection {
    pub kept: Vec<GithubRelease>,
    /// Tags of the releases that were skipped, in API order
    pub ignored: Vec<String>,
}

/// Keep releases whose display name contains `product` (case-sensitive).
///
/// Order is preserved. Each decision is logged.
pub fn select_releases(releases: Vec<GithubRelease>, product: &str) -> Selection {
    let mut selection = Selection::default();

    for release in releases {
        if release.display_name().contains(product) {
            output::info(&format!("Version {} will be processed.", release.tag_name));
            selection.kept.push(release);
        } else {
            output::skip(&format!(
                "Version {} IGNORED: no {} in the name field.",
                release.tag_name, product
            ));
            selection.ignored.push(release.tag_name);
        }
    }

    selection
}
