//! # regex_subdir_graph
//!
//! Count, per directory, how many entry names match a regular expression,
//! and chart the result.
//!
//! A run walks every directory under a root (root included), lists each
//! directory's immediate entries, and counts the names matching a
//! `/<pattern>/<flags>` expression. Directories that vanish or cannot be
//! read are logged and skipped. The resulting [`MatchTally`] is logged and
//! rendered as a bar chart.
//!
//! ## Example
//!
//! ```rust
//! use regex_subdir_graph::{
//!     build_tally, discover_directories, FsEntrySource, NamePattern, ScanOptions,
//! };
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("a")).unwrap();
//! fs::write(dir.path().join("a/app.LOG"), "").unwrap();
//! fs::write(dir.path().join("a/readme.txt"), "").unwrap();
//!
//! let pattern = NamePattern::parse(r"/\.log$/i").unwrap();
//! let dirs = discover_directories(dir.path(), &ScanOptions::new());
//! let outcome = build_tally(&dirs, &pattern, &FsEntrySource).unwrap();
//! assert_eq!(outcome.tally.get("a"), Some(1));
//! ```

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod pipeline;
pub mod present;
pub mod scan;
pub mod tally;
pub mod utils;

pub use chart::{ChartRenderer, ChartSpec, ChartStyle, SvgChartRenderer};
pub use domain::{
    DirectoryCount, DiscoveredDir, MatchTally, RunReport, SkippedDirectory, TallyOutcome,
};
pub use error::TallyError;
pub use pattern::NamePattern;
pub use pipeline::{run, RunRequest};
pub use present::Presentation;
pub use scan::{discover_directories, EntrySource, FsEntrySource, ScanOptions};
pub use tally::build_tally;

/// Result type for regex_subdir_graph operations
pub type Result<T> = std::result::Result<T, TallyError>;
