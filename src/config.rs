use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::FetchStatus;
use crate::util_text::{AddressOptions, Size};

/// Arcadex - arcade activity feed viewer
///
/// Prints the merged activity feed (or the playthrough list) from a JSON
/// snapshot of the upstream sources.
/// Configuration priority: CLI args > Environment variables > Config file > Defaults
#[derive(Parser, Debug, Default)]
#[command(name = "arcadex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Arcade activity feed viewer", long_about = None)]
pub struct CliArgs {
    /// Path to the JSON snapshot of activity sources
    #[arg(long, env = "ARCADEX_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Fetch status to report: idle, loading, success, error (overrides the snapshot)
    #[arg(long, env = "ARCADEX_STATUS", value_parser = clap::value_parser!(FetchStatus))]
    pub status: Option<FetchStatus>,

    /// Address label preset: xs, sm, base, lg, full
    #[arg(long, env = "ADDRESS_SIZE", value_parser = clap::value_parser!(Size))]
    pub address_size: Option<Size>,

    /// Leading characters kept after the 0x prefix (overrides the preset)
    #[arg(long, env = "ADDRESS_FIRST")]
    pub address_first: Option<usize>,

    /// Trailing characters kept (overrides the preset)
    #[arg(long, env = "ADDRESS_LAST")]
    pub address_last: Option<usize>,

    /// Maximum feed rows to print (1-10000)
    #[arg(long, env = "FEED_LIMIT")]
    pub limit: Option<usize>,

    /// Print playthrough records instead of the activity feed
    #[arg(long)]
    pub discover: bool,

    /// Optional config file path (TOML format)
    #[arg(long, env = "ARCADEX_CONFIG")]
    pub config_file: Option<PathBuf>,
}

/// Configuration loaded from TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub snapshot: Option<PathBuf>,
    pub status: Option<FetchStatus>,
    pub limit: Option<usize>,
    #[serde(default)]
    pub address: AddressFileConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressFileConfig {
    pub size: Option<Size>,
    pub first: Option<usize>,
    pub last: Option<usize>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub snapshot: PathBuf,
    /// None keeps the status recorded in the snapshot
    pub status: Option<FetchStatus>,
    pub address: AddressOptions,
    pub limit: usize,
    pub discover: bool,
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Load configuration from CLI args and environment variables
pub fn load() -> Result<Config> {
    Config::from_args(CliArgs::parse())
}

impl Config {
    /// Merge parsed args over the optional config file and defaults
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let file = match &args.config_file {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let snapshot = args
            .snapshot
            .or(file.snapshot)
            .unwrap_or_else(|| PathBuf::from("./arcadex_snapshot.json"));

        let limit = args.limit.or(file.limit).unwrap_or(50);
        let limit = validate_in_range(limit, 1, 10000, "FEED_LIMIT")?;

        // Explicit counts from one layer replace the other layer's counts as a pair,
        // so a CLI `--address-first` never combines with a file `last`.
        let (first, last) = if args.address_first.is_some() || args.address_last.is_some() {
            (args.address_first, args.address_last)
        } else {
            (file.address.first, file.address.last)
        };

        Ok(Config {
            snapshot,
            status: args.status.or(file.status),
            address: AddressOptions {
                first,
                last,
                size: args.address_size.or(file.address.size),
                padding: None,
            },
            limit,
            discover: args.discover,
        })
    }

    /// Print current configuration (useful for debugging)
    pub fn log_summary(&self) {
        log::debug!("Arcadex Configuration:");
        log::debug!("  Snapshot: {}", self.snapshot.display());
        match self.status {
            Some(status) => log::debug!("  Status: {status} (override)"),
            None => log::debug!("  Status: from snapshot"),
        }
        log::debug!("  Address: {:?}", self.address);
        log::debug!("  Limit: {} rows", self.limit);
    }
}
