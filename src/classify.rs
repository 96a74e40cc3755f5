//! Asset filename classification
//!
//! Maps an asset filename to the operating system and CPU architecture it
//! targets. This is a heuristic over the project's naming convention
//! (`<prefix>-<os>[-<arch>]-<version>.<ext>`), not a guarantee: a filename that
//! does not follow it is simply not classified.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Mac,
    Windows,
}

impl Os {
    /// Matching precedence, also the order of the `AssetTable` slots.
    pub const ALL: [Os; 3] = [Os::Linux, Os::Mac, Os::Windows];

    /// Column order in rendered tables.
    pub const COLUMNS: [Os; 3] = [Os::Mac, Os::Linux, Os::Windows];

    /// Filename marker following the asset prefix ("typedb-all-linux")
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Windows => "windows",
        }
    }

    /// Key used in `tag::<key>[]` region markers. Downstream pages include
    /// these names, so they must stay stable.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Linux => "lin",
            Self::Mac => "mac",
            Self::Windows => "win",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Linux => 0,
            Self::Mac => 1,
            Self::Windows => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Arm64,
    X86_64,
}

impl Arch {
    /// Marker searched for in filenames, also the link label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::X86_64 => "x86_64",
        }
    }
}

/// Classifies filenames against `<prefix>-<os>` markers.
#[derive(Debug, Clone)]
pub struct Classifier {
    markers: [(Os, String); 3],
}

impl Classifier {
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.to_lowercase();
        let markers = Os::ALL.map(|os| (os, format!("{}-{}", prefix, os.marker())));
        Self { markers }
    }

    /// Classify a filename. `None` means the asset is not a platform bundle.
    ///
    /// The architecture is `None` when the name carries no marker; such
    /// "generic" assets are treated as x86_64 downstream.
    pub fn classify(&self, filename: &str) -> Option<(Os, Option<Arch>)> {
        let name = filename.to_lowercase();
        let os = self
            .markers
            .iter()
            .find(|(_, marker)| name.contains(marker.as_str()))
            .map(|(os, _)| *os)?;
        Some((os, detect_arch(&name)))
    }
}

fn detect_arch(name: &str) -> Option<Arch> {
    if name.contains(Arch::Arm64.label()) {
        Some(Arch::Arm64)
    } else if name.contains(Arch::X86_64.label()) {
        Some(Arch::X86_64)
    } else {
        None
    }
}
