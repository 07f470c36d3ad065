//! CLI overrides on top of file configuration

use super::Config;
use std::path::PathBuf;

/// Values given on the command line. Unset options and `false` flags leave
/// the file configuration untouched.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub include_hidden: bool,
    pub follow_symlinks: bool,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(dir) = cli.output_dir {
        config.output_dir = Some(dir);
    }
    config.include_hidden |= cli.include_hidden;
    config.follow_symlinks |= cli.follow_symlinks;
    config
}
