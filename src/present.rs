//! Turning a tally into log lines and chart inputs

use crate::domain::MatchTally;
use crate::error::TallyError;

/// Horizontal pixels shared by all bars.
pub const BAR_AREA_WIDTH: usize = 400;

/// Spacing between adjacent bars.
pub const BAR_SPACING: usize = 1;

/// Chart-ready view of a non-empty tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// `"<path>: <count>, "` per directory, in tally order
    pub listing: Vec<String>,
    pub counts: Vec<usize>,
    pub max_count: usize,
    pub bar_width: usize,
}

impl Presentation {
    pub fn from_tally(tally: &MatchTally) -> Result<Self, TallyError> {
        if tally.is_empty() {
            return Err(TallyError::NoMatch);
        }

        let listing = format_listing(tally);
        let counts = tally.counts();
        let bar_width = BAR_AREA_WIDTH / counts.len();
        if bar_width < 1 {
            return Err(TallyError::ChartTooLarge { directories: counts.len() });
        }
        let max_count = counts.iter().copied().max().unwrap_or(0);

        Ok(Self { listing, counts, max_count, bar_width })
    }
}

pub fn format_listing(tally: &MatchTally) -> Vec<String> {
    tally.iter().map(|entry| format!("{}: {}, ", entry.path, entry.count)).collect()
}
