//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::common::config::{DEFAULT_DATA_FILE, DEFAULT_EXPORT_FILE};
use crate::common::{FinalizeMode, ShortReadPolicy, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "stockfile")]
#[command(about = "Interactive inventory tracker over a fixed-width record file")]
pub struct Args {
    /// Binary record file.
    #[arg(long, env = "STOCKFILE_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// CSV export target.
    #[arg(long, env = "STOCKFILE_CSV_FILE", default_value = DEFAULT_EXPORT_FILE)]
    pub csv_file: PathBuf,

    /// What to do with a partial record at the end of the data file.
    #[arg(long, value_enum, env = "STOCKFILE_SHORT_READ", default_value_t = ShortReadArg::Strict)]
    pub short_read: ShortReadArg,

    /// How edit and delete replace the data file.
    #[arg(long, value_enum, env = "STOCKFILE_FINALIZE", default_value_t = FinalizeArg::Atomic)]
    pub finalize: FinalizeArg,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShortReadArg {
    /// Report a truncated record.
    Strict,
    /// Ignore the partial tail.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FinalizeArg {
    /// Rename over the old file in one step.
    Atomic,
    /// Remove the old file, then rename.
    RemoveThenRename,
}

impl From<ShortReadArg> for ShortReadPolicy {
    fn from(arg: ShortReadArg) -> Self {
        match arg {
            ShortReadArg::Strict => ShortReadPolicy::Strict,
            ShortReadArg::Lenient => ShortReadPolicy::Lenient,
        }
    }
}

impl From<FinalizeArg> for FinalizeMode {
    fn from(arg: FinalizeArg) -> Self {
        match arg {
            FinalizeArg::Atomic => FinalizeMode::AtomicRename,
            FinalizeArg::RemoveThenRename => FinalizeMode::RemoveThenRename,
        }
    }
}

impl Args {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_file)
            .with_export_path(&self.csv_file)
            .with_short_read(self.short_read.into())
            .with_finalize(self.finalize.into())
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
