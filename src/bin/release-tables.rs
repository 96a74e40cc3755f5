//! release-tables - AsciiDoc download tables from GitHub releases
//!
//! Usage:
//!   release-tables [generate] [--strict]   Write all-versions.adoc and latest-version.adoc
//!   release-tables dump                    Print the raw release JSON

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use release_tables::{github, output, pipeline, Config, HttpClient};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "release-tables")]
#[command(about = "Generate AsciiDoc download tables from GitHub releases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch releases, check download links and write both tables (default)
    Generate {
        /// Exit with an error when any download link failed validation
        #[arg(long)]
        strict: bool,
    },

    /// Print each release of the listing as raw JSON, one per line
    Dump,
}

#[derive(Args)]
struct Overrides {
    /// TOML config file; flags below take precedence over it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Repository in "owner/repo" format
    #[arg(long, global = true)]
    repo: Option<String>,

    /// Text a release name must contain to be included
    #[arg(long, global = true)]
    product: Option<String>,

    /// Asset filename prefix before the OS marker
    #[arg(long, global = true)]
    asset_prefix: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Output path of the full version table
    #[arg(long, global = true)]
    all_versions: Option<PathBuf>,

    /// Output path of the latest version table
    #[arg(long, global = true)]
    latest_version: Option<PathBuf>,

    /// HTTP timeout in seconds (5-300)
    #[arg(long, global = true, env = "RELEASE_TABLES_HTTP_TIMEOUT")]
    timeout: Option<u64>,

    /// GitHub token, raises the API rate limit
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl Overrides {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(repo) = self.repo {
            config.repo = repo;
        }
        if let Some(product) = self.product {
            config.product = product;
        }
        if let Some(prefix) = self.asset_prefix {
            config.asset_prefix = prefix;
        }
        if let Some(api_base) = self.api_base {
            config.api_base = api_base;
        }
        if let Some(path) = self.all_versions {
            config.all_versions_file = path;
        }
        if let Some(path) = self.latest_version {
            config.latest_version_file = path;
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        if self.token.is_some() {
            config.token = self.token;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.overrides.into_config()?;
    let client = HttpClient::new(&config);

    match cli.command.unwrap_or(Commands::Generate { strict: false }) {
        Commands::Generate { strict } => {
            let summary = pipeline::run(&config, &client, &client)?;

            output::info(&format!(
                "{} release(s) processed, {} ignored, {} broken link(s)",
                summary.processed.len(),
                summary.ignored.len(),
                summary.failed_urls.len()
            ));

            if strict && summary.has_broken_links() {
                anyhow::bail!(
                    "{} download link(s) failed validation",
                    summary.failed_urls.len()
                );
            }
        }

        Commands::Dump => {
            let releases = github::fetch_raw_releases(&client, &config)
                .with_context(|| format!("Failed to list releases of {}", config.repo))?;
            for release in releases {
                println!("{}", release);
            }
        }
    }

    Ok(())
}
