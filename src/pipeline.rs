//! One documentation build: fetch, filter, validate, render, write.

use crate::classify::Classifier;
use crate::core::config::Config;
use crate::core::output;
use crate::github::{self, GithubRelease};
use crate::http::HttpClient;
use crate::release::ReleaseData;
use crate::render::{render_table, TagMode};
use crate::validate::{LinkChecker, ValidationReport, ValidationStatus};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// What a run did. Fetch errors never get this far.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Tags of kept releases, in API order
    pub processed: Vec<String>,
    /// Tags of releases without the product name
    pub ignored: Vec<String>,
    /// Download URLs that failed validation, each once
    pub failed_urls: Vec<String>,
    pub written: Vec<PathBuf>,
    /// Files that could not be written, with the error text
    pub write_errors: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn has_broken_links(&self) -> bool {
        !self.failed_urls.is_empty()
    }
}

/// Overwrite `path` with `content`, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Error while writing file: {}", path.display()))
}

/// Run the whole build against the configured repository.
///
/// Only the release fetch can fail the run; link and write failures are
/// reported and recorded in the summary.
pub fn run(config: &Config, client: &HttpClient, checker: &dyn LinkChecker) -> Result<RunSummary> {
    output::action(&format!("Fetching releases for {}", config.repo));
    let spinner = output::spinner(&format!("GET {}", config.releases_url()));
    let fetched = github::fetch_releases(client, config);
    output::progress_done(spinner);
    let releases = fetched.with_context(|| format!("Failed to list releases of {}", config.repo))?;

    Ok(generate(config, releases, checker))
}

/// Everything after the fetch. Split out so it can run on fixed input.
pub fn generate(config: &Config, releases: Vec<GithubRelease>, checker: &dyn LinkChecker) -> RunSummary {
    let selection = github::select_releases(releases, &config.product);
    let mut summary = RunSummary {
        processed: selection.kept.iter().map(|r| r.tag_name.clone()).collect(),
        ignored: selection.ignored,
        ..RunSummary::default()
    };

    let (versions, report) = collect_all(&selection.kept, &Classifier::new(&config.asset_prefix), checker);

    let all_downloads = render_table(&versions, TagMode::Plain);
    write_reported(&config.all_versions_file, &all_downloads, &mut summary);

    match versions.first() {
        Some(latest) => {
            let latest_downloads = render_table(std::slice::from_ref(latest), TagMode::Tagged);
            write_reported(&config.latest_version_file, &latest_downloads, &mut summary);
        }
        None => output::warning(&format!(
            "No {} release found, {} not written",
            config.product,
            config.latest_version_file.display()
        )),
    }

    for url in report.failed_urls() {
        output::warning(&format!("The following error occurred: {}", url));
    }
    summary.failed_urls = report.into_failed_urls();
    summary
}

fn collect_all(
    releases: &[GithubRelease],
    classifier: &Classifier,
    checker: &dyn LinkChecker,
) -> (Vec<ReleaseData>, ValidationReport) {
    let total: usize = releases
        .iter()
        .map(|r| ReleaseData::count_classified(r, classifier))
        .sum();
    output::action(&format!("Checking {} download links", total));

    let progress = output::check_progress(total as u64);
    let counted = CountingChecker {
        inner: checker,
        progress: &progress,
    };

    let mut versions = Vec::with_capacity(releases.len());
    let mut report = ValidationReport::new();
    for release in releases {
        progress.set_message(release.tag_name.clone());
        let (data, release_report) = ReleaseData::collect(release, classifier, &counted);
        versions.push(data);
        report.merge(release_report);
    }
    output::progress_done(progress);

    (versions, report)
}

fn write_reported(path: &Path, content: &str, summary: &mut RunSummary) {
    match write_output(path, content) {
        Ok(()) => {
            output::success(&format!("File {} write complete!", path.display()));
            summary.written.push(path.to_path_buf());
        }
        Err(e) => {
            output::error(&format!("{:#}", e));
            summary.write_errors.push((path.to_path_buf(), format!("{:#}", e)));
        }
    }
}

/// Advances the progress bar after each check.
struct CountingChecker<'a> {
    inner: &'a dyn LinkChecker,
    progress: &'a ProgressBar,
}

impl LinkChecker for CountingChecker<'_> {
    fn check(&self, url: &str) -> ValidationStatus {
        let status = self.inner.check(url);
        self.progress.inc(1);
        status
    }
}
