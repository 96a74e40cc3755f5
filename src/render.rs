//! AsciiDoc table rendering
//!
//! Produces table rows only; the surrounding `|===` block lives in the page
//! that includes the generated file. Output is a pure function of its input so
//! unchanged releases give byte-identical files.

use crate::classify::{Arch, Os};
use crate::release::{OsAssets, ReleaseData};

/// Whether each OS cell is wrapped in `tag::`/`end::` include markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
    Plain,
    Tagged,
}

/// Render one row per release: release notes link, then mac, linux and
/// windows download cells.
pub fn render_table(releases: &[ReleaseData], mode: TagMode) -> String {
    let mut out = String::new();
    for release in releases {
        render_row(&mut out, release, mode);
    }
    out
}

fn render_row(out: &mut String, release: &ReleaseData, mode: TagMode) {
    out.push_str(&format!("\n| {}[{}]\n", release.release_notes, release.version));

    for os in Os::COLUMNS {
        out.push_str("| ");
        if mode == TagMode::Tagged {
            out.push_str(&format!("\n// tag::{}[]\n", os.tag()));
        }

        let assets = release.assets.get(os);
        out.push_str(&cell_links(assets));
        out.push('\n');

        if mode == TagMode::Tagged {
            out.push_str(&format!("// end::{}[]\n", os.tag()));
        }
        out.push_str(&check_line(assets));
    }
}

/// "url[x86_64]", "url[x86_64] / url[arm64]", "url[arm64]" or nothing
fn cell_links(assets: &OsAssets) -> String {
    let primary = assets
        .primary
        .as_ref()
        .map(|e| format!("{}[{}]", e.url, Arch::X86_64.label()));
    let arm64 = assets
        .arm64
        .as_ref()
        .map(|e| format!("{}[{}]", e.url, Arch::Arm64.label()));

    primary
        .into_iter()
        .chain(arm64)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// "// Check: PASSED Fail", or a bare "// Check:" for a cell without assets
fn check_line(assets: &OsAssets) -> String {
    let statuses: Vec<_> = assets.entries().map(|e| e.status.as_str()).collect();
    if statuses.is_empty() {
        "// Check:\n".to_string()
    } else {
        format!("// Check: {}\n", statuses.join(" "))
    }
}
