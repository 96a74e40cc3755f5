//! Per-release download data
//!
//! Turns a kept GitHub release into a `ReleaseData`: version label, release
//! notes link, and a fixed-size table of validated platform assets.

use crate::classify::{Arch, Classifier, Os};
use crate::github::GithubRelease;
use crate::validate::{LinkChecker, ValidationReport, ValidationStatus};

/// One classified and validated download link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub os: Os,
    /// `None` for generic assets whose name has no architecture marker
    pub arch: Option<Arch>,
    pub url: String,
    pub status: ValidationStatus,
}

/// Downloads for one operating system.
///
/// Generic and x86_64 assets share the `primary` slot (rendered as x86_64);
/// arm64 assets have their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsAssets {
    pub primary: Option<AssetEntry>,
    pub arm64: Option<AssetEntry>,
}

impl OsAssets {
    /// Present entries, primary first
    pub fn entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.primary.iter().chain(self.arm64.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.arm64.is_none()
    }
}

/// At most one entry per (OS, slot)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTable {
    slots: [OsAssets; 3],
}

impl AssetTable {
    /// Insert an entry, replacing any earlier entry in the same slot.
    pub fn insert(&mut self, entry: AssetEntry) {
        let slots = &mut self.slots[entry.os.index()];
        match entry.arch {
            Some(Arch::Arm64) => slots.arm64 = Some(entry),
            Some(Arch::X86_64) | None => slots.primary = Some(entry),
        }
    }

    pub fn get(&self, os: Os) -> &OsAssets {
        &self.slots[os.index()]
    }

    pub fn len(&self) -> usize {
        self.slots.iter().map(|s| s.entries().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(OsAssets::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseData {
    /// Tag name, used as the link label
    pub version: String,
    /// Release notes page
    pub release_notes: String,
    pub assets: AssetTable,
}

impl ReleaseData {
    /// Classify and validate a release's assets, in listing order.
    ///
    /// Every classified asset is checked exactly once, including one that a
    /// later asset replaces in the table. Failures go into the returned report.
    pub fn collect(
        release: &GithubRelease,
        classifier: &Classifier,
        checker: &dyn LinkChecker,
    ) -> (Self, ValidationReport) {
        let mut assets = AssetTable::default();
        let mut report = ValidationReport::new();

        for asset in &release.assets {
            let Some((os, arch)) = classifier.classify(&asset.name) else {
                continue;
            };
            let url = asset.browser_download_url.clone();
            let status = checker.check(&url);
            report.record(&url, status);
            assets.insert(AssetEntry { os, arch, url, status });
        }

        let data = Self {
            version: release.tag_name.clone(),
            release_notes: release.html_url.clone(),
            assets,
        };
        (data, report)
    }

    /// Number of assets in `release` that `collect` would check
    pub fn count_classified(release: &GithubRelease, classifier: &Classifier) -> usize {
        release
            .assets
            .iter()
            .filter(|a| classifier.classify(&a.name).is_some())
            .count()
    }
}
