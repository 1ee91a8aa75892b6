use crate::error::{Error, Result};
use crate::models::{CanonicalSeries, RawPoint, SeriesPoint};

/// Turn raw provider observations into the canonical series.
///
/// Drops every point whose value is null, coerces the date string to an
/// integer year, and sorts ascending by year. The sort is stable: duplicate
/// years keep their original relative order and are retained, not deduped.
///
/// ### Errors
/// [`Error::NoValidData`] when nothing survives the null filter.
pub fn normalize(raw: &[RawPoint]) -> Result<CanonicalSeries> {
    let mut series: CanonicalSeries = raw
        .iter()
        .filter_map(|p| {
            p.value.map(|value| SeriesPoint {
                year: p.year(),
                value,
            })
        })
        .collect();

    if series.is_empty() {
        return Err(Error::NoValidData);
    }

    // sort_by_key is a stable sort; the tie-order guarantee relies on that.
    series.sort_by_key(|p| p.year);
    Ok(series)
}

/// First and last year of the series, for the "data period" display.
pub fn span(series: &[SeriesPoint]) -> Option<(i32, i32)> {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => Some((first.year, last.year)),
        _ => None,
    }
}
