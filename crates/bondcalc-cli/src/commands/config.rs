//! Config command implementation.
//!
//! Shows and initializes the engine configuration file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_key_values, print_success, KeyValue};
use crate::settings::{self, LoadedSettings, Settings};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective engine configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    ctx: &Context,
    loaded: &LoadedSettings,
    explicit: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx, loaded),
        ConfigCommand::Path => {
            println!("{}", target_path(explicit)?.display());
            Ok(())
        }
        ConfigCommand::Init { force } => init(explicit, force),
    }
}

fn show(ctx: &Context, loaded: &LoadedSettings) -> Result<()> {
    let engine = &loaded.engine;
    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());

    let rows = vec![
        KeyValue::new("Source", source),
        KeyValue::new("yield_lower_bound", engine.yield_lower_bound.to_string()),
        KeyValue::new("yield_upper_bound", engine.yield_upper_bound.to_string()),
        KeyValue::new("tolerance", format!("{:e}", engine.tolerance)),
        KeyValue::new("max_iterations", engine.max_iterations.to_string()),
    ];

    print_key_values("Engine Configuration", &rows, ctx.format, "Source")
}

fn init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = target_path(explicit)?;
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(CliError::from)?;
    }
    std::fs::write(&path, settings::render(&Settings::default())?).map_err(CliError::from)?;

    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn target_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => settings::default_config_path(),
    }
}
