//! Download tables for release documentation
//!
//! Reads a project's GitHub releases and writes two AsciiDoc table fragments
//! for the documentation site: every version, and the latest version with
//! `tag::` include markers around each operating system cell.
//!
//! # Pipeline
//!
//! 1. Fetch the most recent releases (one page of up to 100).
//! 2. Keep releases whose name contains the product name.
//! 3. Classify each asset by OS and architecture from its filename.
//! 4. HEAD every classified download link and record failures.
//! 5. Render the tables and write both files.
//!
//! # Output
//!
//! ```text
//!
//! | https://github.com/vaticle/typedb/releases/tag/2.28.0[2.28.0]
//! | https://.../typedb-all-mac-x86_64-2.28.0.zip[x86_64] / https://.../typedb-all-mac-arm64-2.28.0.zip[arm64]
//! // Check: PASSED PASSED
//! | https://.../typedb-all-linux-x86_64-2.28.0.tar.gz[x86_64] / https://.../typedb-all-linux-arm64-2.28.0.tar.gz[arm64]
//! // Check: PASSED PASSED
//! | https://.../typedb-all-windows-2.28.0.zip[x86_64]
//! // Check: PASSED
//! ```

pub mod classify;
pub mod core;
pub mod github;
pub mod http;
pub mod pipeline;
pub mod release;
pub mod render;
pub mod validate;

pub use crate::core::config::Config;
pub use crate::core::output;
pub use http::{FetchError, HttpClient};
pub use pipeline::RunSummary;
