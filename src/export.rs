//! The dashboard's downloadable export: a plain CSV rendering of the
//! canonical series.

use crate::models::SeriesPoint;
use anyhow::Result;
use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// MIME type of the export artifact.
pub const CSV_MIME: &str = "text/csv";

/// Render one CSV value field.
///
/// The canonical series never carries a missing value today; the `None`
/// branch covers a future relaxation of that invariant.
pub fn csv_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

/// Serialize the series as the dashboard's CSV download.
///
/// Header row `Year,<metricLabel>,Country`, then one row per point in series
/// order (no resorting). Plain comma and newline separators, no quoting and
/// no trailing newline: the data this carries (years and numbers) never
/// needs escaping, and the writer makes no round-trip-safety promise beyond
/// that.
pub fn to_csv(series: &[SeriesPoint], series_label: &str, metric_label: &str) -> String {
    let mut rows = Vec::with_capacity(series.len() + 1);
    rows.push(format!("Year,{},Country", metric_label));
    for p in series {
        rows.push(format!(
            "{},{},{}",
            p.year,
            csv_value(Some(p.value)),
            series_label
        ));
    }
    rows.join("\n")
}

/// File name of the download artifact: `<Country>-<Metric>-<CurrentYear>.csv`.
pub fn download_filename(country_name: &str, metric_name: &str) -> String {
    format!("{}-{}-{}.csv", country_name, metric_name, Local::now().year())
}

/// Write the artifact into `dir` under its download file name and return the
/// full path.
pub fn save_artifact<P: AsRef<Path>>(
    series: &[SeriesPoint],
    country_name: &str,
    metric_name: &str,
    dir: P,
) -> Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(download_filename(country_name, metric_name));
    fs::write(&path, to_csv(series, country_name, metric_name))?;
    Ok(path)
}
