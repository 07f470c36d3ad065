//! Configuration loading and merging
//!
//! Handles loading from config files and CLI arguments with proper
//! precedence (CLI > File > Defaults).

use crate::chart::ChartStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Settings that may come from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where chart images are written; defaults to the working directory
    pub output_dir: Option<PathBuf>,
    pub include_hidden: bool,
    pub follow_symlinks: bool,
    pub chart: ChartStyle,
}
