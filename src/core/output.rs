//! Colored console output and progress reporting
//!
//! Uses owo-colors for terminal colors and indicatif for the fetch spinner and
//! the link-check progress bar. Informational lines go to stdout, warnings and
//! errors to stderr.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Print an action header (blue, bold)
/// Example: "==> Fetching releases for vaticle/typedb"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a success message (green)
/// Example: "==> File all-versions.adoc write complete!"
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Print an info message (cyan prefix)
pub fn info(message: &str) {
    println!("{} {}", "::".cyan(), message);
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message.red());
}

/// Print a skip message (dimmed)
/// Example: "==> Version 2.0.0 IGNORED: no TypeDB in the name field."
pub fn skip(message: &str) {
    println!("{} {}", "==>".dimmed(), message.dimmed());
}

/// Create a spinner for a single blocking request
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("     {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Create a progress bar counting checked download links
pub fn check_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("     {spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━╸━");
    pb.set_style(style);
    pb
}

/// Finish a progress bar and clear it
pub fn progress_done(pb: ProgressBar) {
    pb.finish_and_clear();
}
