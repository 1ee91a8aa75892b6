use crate::catalog::{Country, MetricDescriptor};
use crate::models::SeriesPoint;
use anyhow::Result;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One persisted observation in the tidy schema: the canonical series point
/// joined with the selection metadata it was fetched under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TidyRow {
    pub country_code: String,
    pub country_name: String,
    pub metric_id: String,
    pub metric_name: String,
    pub indicator: String,
    pub year: i32,
    pub value: f64,
}

/// Join a canonical series with its selection metadata, one row per point.
pub fn tidy_rows(
    series: &[SeriesPoint],
    country: &Country,
    metric: &MetricDescriptor,
) -> Vec<TidyRow> {
    series
        .iter()
        .map(|p| TidyRow {
            country_code: country.code.to_string(),
            country_name: country.name.to_string(),
            metric_id: metric.id.to_string(),
            metric_name: metric.name.to_string(),
            indicator: metric.indicator.to_string(),
            year: p.year,
            value: p.value,
        })
        .collect()
}

/// Save the series as tidy CSV with a header row.
pub fn save_csv<P: AsRef<Path>>(
    series: &[SeriesPoint],
    country: &Country,
    metric: &MetricDescriptor,
    path: P,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    for row in tidy_rows(series, country, metric) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the series as a pretty JSON array of tidy rows.
pub fn save_json<P: AsRef<Path>>(
    series: &[SeriesPoint],
    country: &Country,
    metric: &MetricDescriptor,
    path: P,
) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&tidy_rows(series, country, metric))?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
