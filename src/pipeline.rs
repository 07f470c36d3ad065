//! One complete run: discover, tally, present, render.

use crate::chart::{chart_filename, ChartRenderer, ChartSpec, ChartStyle};
use crate::domain::RunReport;
use crate::error::TallyError;
use crate::pattern::NamePattern;
use crate::present::{format_listing, Presentation};
use crate::scan::{discover_directories, EntrySource, ScanOptions};
use crate::tally::build_tally;
use chrono::Local;
use std::path::PathBuf;

const SECTION_RULE: &str = "===========================";
const RUN_END_RULE: &str = "******************************";

/// Validated inputs for [`run`].
#[derive(Debug, Clone)]
pub struct RunRequest {
    root: PathBuf,
    pattern: NamePattern,
    scan: ScanOptions,
    style: ChartStyle,
    output_dir: PathBuf,
}

impl RunRequest {
    /// Validate the root directory and parse the `/<pattern>/<flags>` string.
    ///
    /// Nothing is logged or traversed here; invalid input fails first.
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self, TallyError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TallyError::InvalidRoot(root));
        }
        let pattern = NamePattern::parse(pattern)?;
        Ok(Self {
            root,
            pattern,
            scan: ScanOptions::default(),
            style: ChartStyle::default(),
            output_dir: PathBuf::from("."),
        })
    }

    pub fn scan_options(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    pub fn style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Directory the chart file is written to
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Run the whole pipeline with the given listing and rendering backends.
pub fn run<S, R>(request: &RunRequest, lister: &S, renderer: &R) -> Result<RunReport, TallyError>
where
    S: EntrySource + ?Sized,
    R: ChartRenderer + ?Sized,
{
    tracing::debug!(
        "Looking for a match to the file name with {} in the directory, {}, and its sub directories.",
        request.pattern,
        request.root.display()
    );

    let directories = discover_directories(&request.root, &request.scan);
    tracing::debug!("Discovered {} directories", directories.len());

    let outcome = build_tally(&directories, &request.pattern, lister)?;
    if outcome.tally.is_empty() {
        let err = TallyError::NoMatch;
        tracing::info!("{}", err);
        return Err(err);
    }

    tracing::info!("{}", SECTION_RULE);
    tracing::info!("Output the data result in array: {:?}", format_listing(&outcome.tally));
    tracing::info!("{}", SECTION_RULE);

    let presentation = match Presentation::from_tally(&outcome.tally) {
        Ok(p) => p,
        Err(err) => {
            tracing::info!("{}", err);
            tracing::info!("{}", RUN_END_RULE);
            return Err(err);
        }
    };

    let filename = chart_filename(&request.output_dir, Local::now(), renderer.file_extension());
    let spec = ChartSpec::from_presentation(&presentation, &request.style, filename);
    if let Ok(json) = serde_json::to_string(&spec) {
        tracing::debug!("Chart configuration: {}", json);
    }

    let chart_path = renderer.render(&spec)?;
    tracing::info!("Graphic file has been generated");
    tracing::info!("{}", RUN_END_RULE);

    Ok(RunReport { tally: outcome.tally, skipped: outcome.skipped, chart_path })
}
