//! Download link validation
//!
//! Every classified asset URL gets exactly one reachability check. Failures are
//! collected into a `ValidationReport` that the caller threads through the run
//! and prints at the end.

use crate::http::HttpClient;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Passed,
    Fail,
}

impl ValidationStatus {
    /// Text written into the `// Check:` comment of a table cell
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Fail => "Fail",
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks whether a download URL is reachable.
pub trait LinkChecker {
    fn check(&self, url: &str) -> ValidationStatus;
}

impl LinkChecker for HttpClient {
    /// HEAD the URL without following redirects; any status below 400
    /// (including 3xx) passes. Transport failures fail.
    fn check(&self, url: &str) -> ValidationStatus {
        match self.head_status(url) {
            Ok(code) if code < 400 => ValidationStatus::Passed,
            _ => ValidationStatus::Fail,
        }
    }
}

/// URLs that failed validation, in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failed: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one check. Passing URLs are not recorded and a
    /// failing URL is recorded at most once.
    pub fn record(&mut self, url: &str, status: ValidationStatus) {
        if !status.is_passed() && !self.failed.iter().any(|u| u == url) {
            self.failed.push(url.to_string());
        }
    }

    pub fn merge(&mut self, other: ValidationReport) {
        for url in other.failed {
            self.record(&url, ValidationStatus::Fail);
        }
    }

    pub fn failed_urls(&self) -> &[String] {
        &self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn into_failed_urls(self) -> Vec<String> {
        self.failed
    }
}
