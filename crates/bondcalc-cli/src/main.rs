//! bondcalc CLI - Command-line interface for bond valuation.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond from a yield (percent)
//! bondcalc price --issue 2021-01-01 --term 2 --coupon 8 --yield 6
//!
//! # Solve for yield from a clean price
//! bondcalc yield --issue 2021-01-01 --term 5 --coupon 5 --price 103.72
//!
//! # Duration, convexity and a +/-100bp price-change estimate
//! bondcalc risk --issue 2021-01-01 --term 5 --coupon 5 --price 103.72
//!
//! # Value a CSV universe in parallel
//! bondcalc --format csv batch universe.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let loaded = if cli.command.reads_settings() {
        settings::load(cli.config.as_deref())?
    } else {
        settings::LoadedSettings::default()
    };
    let ctx = Context {
        format: cli.format,
        engine: loaded.engine,
        pricing_date: cli.pricing_date,
    };

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Yield(args) => commands::yield_cmd::execute(args, &ctx)?,
        Commands::Accrued(args) => commands::accrued::execute(args, &ctx)?,
        Commands::Risk(args) => commands::risk::execute(args, &ctx)?,
        Commands::Daycount(args) => commands::daycount::execute(args, &ctx)?,
        Commands::Batch(args) => commands::batch::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx, &loaded, cli.config.as_deref())?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
