//! Engine configuration file handling.
//!
//! The file is TOML with an `[engine]` table:
//!
//! ```toml
//! [engine]
//! yield_lower_bound = 0.0
//! yield_upper_bound = 1000.0
//! tolerance = 1e-5
//! max_iterations = 200
//! ```
//!
//! Lookup order: `--config` / `$BONDCALC_CONFIG`, then
//! `<config_dir>/bondcalc/config.toml` if it exists, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bondcalc_bonds::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// On-disk settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Yield search settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Settings plus the file they came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    /// Validated engine configuration.
    pub engine: EngineConfig,
    /// Source file, or `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Returns the default configuration file location.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("could not determine config directory".into()))?;
    Ok(base.join("bondcalc").join("config.toml"))
}

/// Loads the engine configuration.
///
/// An explicit path must exist; the default path is optional.
pub fn load(explicit: Option<&Path>) -> Result<LoadedSettings> {
    if let Some(path) = explicit {
        return read(path);
    }

    match default_config_path() {
        Ok(path) if path.exists() => read(&path),
        _ => {
            debug!("no configuration file, using defaults");
            Ok(LoadedSettings {
                engine: EngineConfig::default(),
                source: None,
            })
        }
    }
}

/// Parses settings from TOML text and validates them.
pub fn parse(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.engine.validate()?;
    Ok(settings)
}

/// Renders settings as TOML.
pub fn render(settings: &Settings) -> Result<String> {
    Ok(toml::to_string_pretty(settings)?)
}

fn read(path: &Path) -> Result<LoadedSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration {}", path.display()))?;
    let settings =
        parse(&content).with_context(|| format!("parsing configuration {}", path.display()))?;

    debug!(path = %path.display(), "loaded configuration");

    Ok(LoadedSettings {
        engine: settings.engine,
        source: Some(path.to_path_buf()),
    })
}
