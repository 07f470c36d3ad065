//! SVG bar chart output.

use super::{ChartRenderer, ChartSpec};
use crate::error::TallyError;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const PLOT_LEFT: f64 = 50.0;
const PLOT_RIGHT_MARGIN: f64 = 20.0;
const PLOT_TOP: f64 = 50.0;
const PLOT_BOTTOM_MARGIN: f64 = 70.0;

/// Writes charts as standalone SVG documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgChartRenderer;

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<PathBuf, TallyError> {
        let document = render_svg(spec);
        let path = spec.filename.clone();
        let to_render_error =
            |e: std::io::Error| TallyError::Render { path: path.clone(), message: e.to_string() };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_render_error)?;
        }
        fs::write(&path, document).map_err(to_render_error)?;
        Ok(path)
    }

    fn file_extension(&self) -> &'static str {
        "svg"
    }
}

/// Build the SVG document for `spec`.
pub fn render_svg(spec: &ChartSpec) -> String {
    let (width, height) = (f64::from(spec.size.0), f64::from(spec.size.1));
    let plot_right = width - PLOT_RIGHT_MARGIN;
    let plot_bottom = height - PLOT_BOTTOM_MARGIN;
    let plot_width = plot_right - PLOT_LEFT;
    let plot_height = plot_bottom - PLOT_TOP;

    let [bar_width, spacing] = spec.bar_width_and_spacing;
    let step = (bar_width + spacing) as f64;
    let total = step * spec.data.len() as f64;
    // Bars keep their configured width unless they would overflow the plot.
    let scale = if total > plot_width { plot_width / total } else { 1.0 };
    let y_max = spec.y_max().max(1) as f64;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = spec.size.0,
        h = spec.size.1
    );
    let _ = writeln!(
        out,
        r##"  <rect x="0" y="0" width="{}" height="{}" fill="#{}"/>"##,
        spec.size.0,
        spec.size.1,
        escape_xml(&spec.background_color)
    );
    let _ = writeln!(
        out,
        r#"  <text x="{:.1}" y="30" font-family="sans-serif" font-size="16" text-anchor="middle">{}</text>"#,
        width / 2.0,
        escape_xml(&spec.title)
    );

    // Axes
    let _ = writeln!(
        out,
        r#"  <line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="black"/>"#,
        l = PLOT_LEFT,
        t = PLOT_TOP,
        b = plot_bottom
    );
    let _ = writeln!(
        out,
        r#"  <line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="black"/>"#,
        l = PLOT_LEFT,
        r = plot_right,
        b = plot_bottom
    );
    if let Some([low, high]) = spec.axis_labels[1] {
        let _ = writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="11" text-anchor="end">{}</text>"#,
            PLOT_LEFT - 5.0,
            plot_bottom,
            low
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="11" text-anchor="end">{}</text>"#,
            PLOT_LEFT - 5.0,
            PLOT_TOP + 4.0,
            high
        );
    }

    for (i, value) in spec.data.iter().enumerate() {
        let bar_height = (*value as f64 / y_max) * plot_height;
        let _ = writeln!(
            out,
            r##"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="#{}"/>"##,
            PLOT_LEFT + 1.0 + i as f64 * step * scale,
            plot_bottom - bar_height,
            bar_width as f64 * scale,
            bar_height,
            escape_xml(&spec.bar_colors)
        );
    }

    // Legend
    let legend_y = height - 25.0;
    for (i, label) in spec.legend.iter().enumerate() {
        let x = PLOT_LEFT + i as f64 * 150.0;
        let _ = writeln!(
            out,
            r##"  <rect x="{:.1}" y="{:.1}" width="10" height="10" fill="#{}"/>"##,
            x,
            legend_y - 9.0,
            escape_xml(&spec.bar_colors)
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="12">{}</text>"#,
            x + 15.0,
            legend_y,
            escape_xml(label)
        );
    }

    out.push_str("</svg>\n");
    out
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
