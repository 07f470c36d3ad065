//! Bar chart configuration and rendering
//!
//! The pipeline builds a [`ChartSpec`] from a [`Presentation`] and hands it
//! to a [`ChartRenderer`]. [`SvgChartRenderer`] is the renderer the binary
//! uses; tests substitute their own.

use crate::error::TallyError;
use crate::present::{Presentation, BAR_SPACING};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

pub mod svg;

pub use svg::SvgChartRenderer;

pub const CHART_WIDTH: u32 = 700;
pub const CHART_HEIGHT: u32 = 400;

/// User-adjustable chart appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub title: String,
    /// Hex colour without `#`
    pub bar_color: String,
    /// Hex colour without `#`
    pub background: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Number of Files Matched".to_string(),
            bar_color: "000000".to_string(),
            background: "EFEFEF".to_string(),
        }
    }
}

/// Complete description of the chart to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(serialize_with = "serialize_size")]
    pub size: (u32, u32),
    pub bar_colors: String,
    pub bar_width_and_spacing: [usize; 2],
    pub title: String,
    pub background_color: String,
    pub legend: Vec<String>,
    pub legend_position: &'static str,
    pub data: Vec<usize>,
    pub axis_with_labels: &'static str,
    pub axis_labels: [Option<[usize; 2]>; 2],
    pub filename: PathBuf,
}

impl ChartSpec {
    pub fn from_presentation(
        presentation: &Presentation,
        style: &ChartStyle,
        filename: PathBuf,
    ) -> Self {
        Self {
            kind: "bar",
            size: (CHART_WIDTH, CHART_HEIGHT),
            bar_colors: style.bar_color.clone(),
            bar_width_and_spacing: [presentation.bar_width, BAR_SPACING],
            title: style.title.clone(),
            background_color: style.background.clone(),
            legend: vec!["Subdirectories".to_string()],
            legend_position: "bottom",
            data: presentation.counts.clone(),
            axis_with_labels: "x,y",
            axis_labels: [None, Some([0, presentation.max_count])],
            filename,
        }
    }

    /// Upper bound of the y axis.
    pub fn y_max(&self) -> usize {
        self.axis_labels[1].map(|[_, max]| max).unwrap_or(0)
    }
}

fn serialize_size<S: Serializer>(size: &(u32, u32), serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{}x{}", size.0, size.1))
}

/// Produces a chart image from a [`ChartSpec`].
pub trait ChartRenderer {
    /// Render the chart and return the path of the written file.
    fn render(&self, spec: &ChartSpec) -> Result<PathBuf, TallyError>;

    /// Extension used for generated chart filenames.
    fn file_extension(&self) -> &'static str;
}

/// Timestamp-based chart filename inside `dir`.
pub fn chart_filename(dir: &Path, now: DateTime<Local>, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", now.format("%Y-%m-%d_%H-%M-%S%z"), extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn presentation() -> Presentation {
        Presentation {
            listing: vec!["x: 3, ".to_string(), "y: 7, ".to_string()],
            counts: vec![3, 7],
            max_count: 7,
            bar_width: 200,
        }
    }

    #[test]
    fn chart_spec_serializes_with_config_keys() {
        let spec = ChartSpec::from_presentation(
            &presentation(),
            &ChartStyle::default(),
            PathBuf::from("out/chart.svg"),
        );
        let value = serde_json::to_value(&spec).expect("json");

        assert_eq!(value["type"], json!("bar"));
        assert_eq!(value["size"], json!("700x400"));
        assert_eq!(value["bar_colors"], json!("000000"));
        assert_eq!(value["bar_width_and_spacing"], json!([200, 1]));
        assert_eq!(value["title"], json!("Number of Files Matched"));
        assert_eq!(value["background_color"], json!("EFEFEF"));
        assert_eq!(value["legend"], json!(["Subdirectories"]));
        assert_eq!(value["legend_position"], json!("bottom"));
        assert_eq!(value["data"], json!([3, 7]));
        assert_eq!(value["axis_with_labels"], json!("x,y"));
        assert_eq!(value["axis_labels"], json!([null, [0, 7]]));
        assert_eq!(spec.y_max(), 7);
    }

    #[test]
    fn style_overrides_apply() {
        let style = ChartStyle {
            title: "Logs".to_string(),
            bar_color: "3366CC".to_string(),
            ..ChartStyle::default()
        };
        let spec = ChartSpec::from_presentation(&presentation(), &style, PathBuf::from("c.svg"));
        assert_eq!(spec.title, "Logs");
        assert_eq!(spec.bar_colors, "3366CC");
        assert_eq!(spec.background_color, "EFEFEF");
    }

    #[test]
    fn filename_is_timestamped() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).single().expect("valid time");
        let path = chart_filename(Path::new("/tmp/out"), now, "svg");
        let name = path.file_name().and_then(|n| n.to_str()).expect("name");
        assert!(name.starts_with("2024-03-09_14-05-07"), "unexpected name {name}");
        assert!(name.ends_with(".svg"));
        assert_eq!(path.parent(), Some(Path::new("/tmp/out")));
    }
}
