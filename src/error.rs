//! Error types for the tally pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run.
///
/// Permission and not-found failures while listing a single directory are
/// not represented here; they are recovered in [`crate::tally`] and reported
/// as [`crate::domain::SkippedDirectory`] entries instead.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Root path is missing or not a directory
    #[error("Input {} is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),

    /// Pattern option does not have the `/<pattern>/<flags>` shape
    #[error("invalid regexp '{0}': expected the form '/<pattern>/<flags>', e.g. '/log$/i'")]
    InvalidPatternShape(String),

    /// Flags other than none or `i`
    #[error("unsupported regexp flags '{flags}' in '{spec}': only 'i' is recognized")]
    UnsupportedFlags { spec: String, flags: String },

    /// Inner pattern failed to compile
    #[error("invalid regexp '{spec}': {source}")]
    InvalidRegex {
        spec: String,
        #[source]
        source: regex::Error,
    },

    /// Listing a directory failed with something other than permission/not-found
    #[error("failed to list directory '{}': {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No match found")]
    NoMatch,

    /// Too many matched directories to give each bar at least one pixel
    #[error(
        "Match found in too many subdirectories ({directories}). Unable to output in chart"
    )]
    ChartTooLarge { directories: usize },

    /// Chart could not be generated or written
    #[error("failed to render chart '{}': {message}", .path.display())]
    Render { path: PathBuf, message: String },
}
