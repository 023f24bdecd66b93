use std::path::Path;

use serde::{Deserialize, Serialize};
use snapdiff_core::DiffLimits;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Settings read from the optional TOML config file.
///
/// Missing tables and fields fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub limits: DiffLimits,
    pub render: RenderConfig,
}

/// Text-rendering settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width of each column, marker included.
    pub width: usize,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 60,
            color: true,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config named on the command line, if any, then apply flag overrides.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(width) = cli.width {
            config.render.width = width;
        }
        if cli.no_color {
            config.render.color = false;
        }
        if let Some(char_limit) = cli.char_limit {
            config.limits.char_limit = char_limit;
        }
        if let Some(max_lines) = cli.max_lines {
            config.limits.max_lines = max_lines;
        }
        if config.render.width < 4 {
            return Err(CliError::InvalidArgument(format!(
                "column width must be at least 4, got {}",
                config.render.width
            )));
        }
        Ok(config)
    }
}
