//! Command-line interface for regex-subdir-graph

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use regex_subdir_graph::config::{load_config, merge_cli_with_config, CliOverrides};
use regex_subdir_graph::logging::{self, DEFAULT_LOG_FILE};
use regex_subdir_graph::{
    run as run_pipeline, FsEntrySource, RunRequest, ScanOptions, SvgChartRenderer,
};

/// Count regex-matching file names in a directory tree and chart them per subdirectory
#[derive(Parser, Debug)]
#[command(name = "regex-subdir-graph")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: regex-subdir-graph --root_dir . --regexp '/log$/i'")]
pub struct Cli {
    /// Root directory
    #[arg(long = "root_dir", value_name = "ROOT_DIR")]
    root_dir: PathBuf,

    /// Regular expression, needed to be in quote: '/<pattern>/<flags>' (only 'i' is supported)
    #[arg(long, value_name = "REGEXP", allow_hyphen_values = true)]
    regexp: String,

    /// Path to config file (regex-subdir-graph.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the chart is written to (default: current directory)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Log file (default: regex_subdir_graph.txt in the current directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Descend into hidden directories
    #[arg(long)]
    include_hidden: bool,

    /// Follow symbolic links to directories
    #[arg(long)]
    follow_symlinks: bool,

    /// Enable verbose logging on stderr (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    execute(Cli::parse())
}

fn execute(cli: Cli) -> Result<()> {
    // Validate inputs before anything is logged or traversed.
    let request = RunRequest::new(&cli.root_dir, &cli.regexp)?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let log_file = cwd.join(cli.log_file.as_deref().unwrap_or(Path::new(DEFAULT_LOG_FILE)));
    logging::init(&log_file, cli.verbose)?;

    let config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            output_dir: cli.output_dir,
            include_hidden: cli.include_hidden,
            follow_symlinks: cli.follow_symlinks,
        },
    );

    let output_dir =
        config.output_dir.as_ref().map(|dir| cwd.join(dir)).unwrap_or_else(|| cwd.clone());
    let request = request
        .scan_options(
            ScanOptions::new()
                .include_hidden(config.include_hidden)
                .follow_symlinks(config.follow_symlinks),
        )
        .style(config.chart)
        .output_dir(output_dir);

    let report = match run_pipeline(&request, &FsEntrySource, &SvgChartRenderer) {
        Ok(report) => report,
        Err(err) => {
            tracing::debug!("Run aborted: {:?}", err);
            return Err(err.into());
        }
    };

    if !report.skipped.is_empty() {
        println!(
            "Skipped {} unreadable director{} (see {})",
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" },
            log_file.display()
        );
    }
    println!("Matches found in {} directories", report.tally.len());
    println!("Chart written to {}", report.chart_path.display());

    Ok(())
}
