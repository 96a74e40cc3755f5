//! Shared infrastructure: run configuration and console output.

pub mod config;
pub mod output;
