//! Sparkline projection: map an ordered series into normalized 2-D plot
//! coordinates, and render the same minimal SVG the dashboard draws.

use crate::models::SeriesPoint;
use serde::{Deserialize, Serialize};

/// Default stroke color of the standalone sparkline.
pub const COLOR_DEFAULT: &str = "#3b82f6";
/// Per-row stroke color for a non-negative change.
pub const COLOR_RISING: &str = "#10b981";
/// Per-row stroke color for a negative or unknown change.
pub const COLOR_FALLING: &str = "#ef4444";

/// One projected vertex in the normalized viewport.
///
/// `x` spans `[0, 100]`; `y` stays inside `[10, 90]`, leaving 10-unit
/// margins top and bottom. The viewport's y axis points down, so larger
/// values map to smaller `y` and plot higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Why a series could not be projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    /// Fewer than two points: no line to draw.
    InsufficientData,
    /// Zero value range: the vertical scale collapses.
    NoVariation,
}

impl Degenerate {
    pub fn reason(&self) -> &'static str {
        match self {
            Degenerate::InsufficientData => "insufficient-data",
            Degenerate::NoVariation => "no-variation",
        }
    }
}

impl std::fmt::Display for Degenerate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// A sparkline ready to render: the projected polyline plus the pixel
/// height of the container it is meant for.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub points: Vec<PlotPoint>,
    pub height: u32,
}

/// Project a series into the fixed viewport.
///
/// Scale-invariant and recomputed per invocation; per-row trend cells call
/// this with every growing prefix of the series. `height` only sizes the
/// rendered container, the coordinates always land in the same band.
pub fn project(series: &[SeriesPoint], height: u32) -> Result<Sparkline, Degenerate> {
    if series.len() < 2 {
        return Err(Degenerate::InsufficientData);
    }

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return Err(Degenerate::NoVariation);
    }

    let n = values.len();
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &value)| PlotPoint {
            x: i as f64 / (n - 1) as f64 * 100.0,
            y: (max - value) / range * 80.0 + 10.0,
        })
        .collect();

    Ok(Sparkline { points, height })
}

impl Sparkline {
    /// SVG `points` attribute: `x,y` pairs joined by spaces, full float
    /// precision (shortest round-trip representation).
    pub fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Self-contained SVG document: a gradient-filled area under the curve
    /// plus the stroke line, in a `0 0 100 100` viewBox stretched to the
    /// container (`preserveAspectRatio="none"`).
    pub fn to_svg(&self, color: &str) -> String {
        let points = self.points_attr();
        let grad_id = format!("spark-{}", color.trim_start_matches('#'));
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"{h}\" ",
                "viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\">",
                "<defs><linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">",
                "<stop offset=\"0%\" stop-color=\"{c}\" stop-opacity=\"0.3\"/>",
                "<stop offset=\"100%\" stop-color=\"{c}\" stop-opacity=\"0.1\"/>",
                "</linearGradient></defs>",
                "<polygon fill=\"url(#{id})\" points=\"0,100 {pts} 100,100\"/>",
                "<polyline fill=\"none\" stroke=\"{c}\" stroke-width=\"2\" ",
                "points=\"{pts}\" vector-effect=\"non-scaling-stroke\"/>",
                "</svg>"
            ),
            h = self.height,
            id = grad_id,
            c = color,
            pts = points,
        )
    }
}

/// Per-row color rule: non-negative change draws green, anything else red
/// (a missing change counts as "else", matching the shell).
pub fn change_color(change_percent: Option<f64>) -> &'static str {
    match change_percent {
        Some(c) if c >= 0.0 => COLOR_RISING,
        _ => COLOR_FALLING,
    }
}
