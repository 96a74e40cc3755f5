//! Run configuration
//!
//! Every field defaults to the values the TypeDB documentation build has always
//! used, so running with no flags and no config file reproduces the historical
//! output. A TOML file may override any subset of fields; CLI flags are applied
//! on top of that by the binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default GitHub API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// The releases endpoint returns at most this many entries per page.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Repository in "owner/repo" format
    pub repo: String,
    /// Substring a release's display name must contain to be kept
    pub product: String,
    /// Asset filename prefix preceding the OS marker ("typedb-all" -> "typedb-all-linux")
    pub asset_prefix: String,
    /// GitHub API base URL, without trailing slash
    pub api_base: String,
    /// Number of releases requested (single page, no pagination)
    pub per_page: u32,
    /// Output path of the full version table
    pub all_versions_file: PathBuf,
    /// Output path of the latest version table
    pub latest_version_file: PathBuf,
    /// HTTP timeout in seconds, clamped to 5..=300
    pub timeout_secs: u64,
    /// Optional GitHub token sent as a bearer token
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: "vaticle/typedb".to_string(),
            product: "TypeDB".to_string(),
            asset_prefix: "typedb-all".to_string(),
            api_base: GITHUB_API_BASE.to_string(),
            per_page: MAX_PER_PAGE,
            all_versions_file: PathBuf::from("all-versions.adoc"),
            latest_version_file: PathBuf::from("latest-version.adoc"),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            token: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text. Missing fields keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Check the fields that would otherwise produce a malformed request
    pub fn validate(&self) -> Result<()> {
        let mut parts = self.repo.split('/');
        let valid_repo = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !valid_repo {
            anyhow::bail!("Repository must be in 'owner/repo' format, got '{}'", self.repo);
        }
        if self.product.is_empty() {
            anyhow::bail!("Product name cannot be empty");
        }
        if self.asset_prefix.is_empty() {
            anyhow::bail!("Asset prefix cannot be empty");
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            anyhow::bail!("per_page must be between 1 and {}, got {}", MAX_PER_PAGE, self.per_page);
        }
        Ok(())
    }

    /// Releases listing endpoint (query string added by the fetcher)
    pub fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_base.trim_end_matches('/'), self.repo)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(5, 300))
    }
}
