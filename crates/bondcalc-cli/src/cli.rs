//! CLI argument definitions.

use std::path::PathBuf;

use bondcalc_core::types::Date;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::config::ConfigCommand;
use crate::commands::{
    AccruedArgs, BatchArgs, ConfigArgs, DaycountArgs, PriceArgs, RiskArgs, YieldArgs,
};

/// bondcalc - Fixed income valuation: price, yield, duration and convexity
#[derive(Parser)]
#[command(name = "bondcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(long, env = "BONDCALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Pricing date (YYYY-MM-DD). Defaults to the bond's issue date.
    #[arg(long, global = true)]
    pub pricing_date: Option<Date>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate clean (and optionally dirty) price from a yield
    Price(PriceArgs),

    /// Solve for yield from a clean price
    Yield(YieldArgs),

    /// Calculate accrued interest at a settlement date
    Accrued(AccruedArgs),

    /// Duration, convexity and price-change estimates
    Risk(RiskArgs),

    /// Day count and year fraction between two dates
    Daycount(DaycountArgs),

    /// Value every bond in a CSV file
    Batch(BatchArgs),

    /// Manage the engine configuration
    Config(ConfigArgs),
}

impl Commands {
    /// Whether the command needs the engine configuration loaded.
    ///
    /// `config init` creates the file, so it must not require one.
    pub fn reads_settings(&self) -> bool {
        !matches!(
            self,
            Commands::Config(ConfigArgs {
                command: ConfigCommand::Init { .. }
            })
        )
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
