//! Common test utilities: release listings served from a mock GitHub API.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
