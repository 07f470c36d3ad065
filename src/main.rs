//! regex-subdir-graph: count regex-matching entry names per directory
//!
//! Scans a root directory and all of its subdirectories, logs how many entry
//! names in each directory match a regular expression, and writes a bar
//! chart of the counts.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
