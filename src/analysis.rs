use crate::models::SeriesPoint;
use serde::{Deserialize, Serialize};

/// Tri-state direction of the latest movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Strict sign classification. No epsilon: an infinitesimally small
    /// nonzero rate still classifies as up or down.
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.0 {
            Trend::Up
        } else if rate < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    /// Arrow glyph for terminal output.
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

/// Derived analytics for one canonical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Most recent observation, `None` for an empty series.
    pub latest: Option<SeriesPoint>,
    /// Latest-over-previous growth in percent; 0 when fewer than two points
    /// or when the previous value is zero.
    pub growth_rate_percent: f64,
    pub trend: Trend,
    /// Latest minus previous value (0 when fewer than two points).
    pub change_absolute: f64,
}

impl TrendSummary {
    fn flat(latest: Option<SeriesPoint>) -> Self {
        TrendSummary {
            latest,
            growth_rate_percent: 0.0,
            trend: Trend::Neutral,
            change_absolute: 0.0,
        }
    }
}

/// Derive latest value, last-period delta, growth rate, and trend.
///
/// Pure and total. The zero-previous division is guarded explicitly so a
/// `NaN`/`Infinity` rate can never reach a caller; the delta is still
/// reported in that case.
pub fn analyze(series: &[SeriesPoint]) -> TrendSummary {
    let Some(latest) = series.last().copied() else {
        return TrendSummary::flat(None);
    };
    if series.len() < 2 {
        return TrendSummary::flat(Some(latest));
    }

    let previous = series[series.len() - 2];
    let change_absolute = latest.value - previous.value;
    let growth_rate_percent = if previous.value == 0.0 {
        0.0
    } else {
        change_absolute / previous.value * 100.0
    };

    TrendSummary {
        latest: Some(latest),
        growth_rate_percent,
        trend: Trend::from_rate(growth_rate_percent),
        change_absolute,
    }
}

/// One row of the historical table: an observation plus its percent change
/// against the previous row. `None` for the first row and whenever the
/// previous value is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeRow {
    pub point: SeriesPoint,
    pub change_percent: Option<f64>,
}

/// Row-by-row year-over-year changes, in series order.
pub fn change_rows(series: &[SeriesPoint]) -> Vec<ChangeRow> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let change_percent = if i == 0 {
                None
            } else {
                let prev = series[i - 1].value;
                (prev != 0.0).then(|| (p.value - prev) / prev * 100.0)
            };
            ChangeRow {
                point: *p,
                change_percent,
            }
        })
        .collect()
}
