//! Owning dashboard state.
//!
//! Selection filters, the currently displayed series, and in-flight request
//! tracking live here, in one place; the pipeline stages stay pure and are
//! handed data by this controller. Every selection change or refresh issues
//! a [`CycleToken`]; a completion is applied only while its token's
//! parameters still match the desired selection, so a superseded fetch that
//! resolves late is discarded instead of overwriting newer state.

use crate::analysis::{self, TrendSummary};
use crate::api::Client;
use crate::catalog;
use crate::error::{Error, Result};
use crate::models::CanonicalSeries;
use crate::series;
use chrono::{DateTime, Local};
use log::{debug, info};

/// The caller's current choice of country, metric, and window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub country_code: String,
    pub metric_id: String,
    pub periods: u32,
}

impl Selection {
    pub fn new(
        country_code: impl Into<String>,
        metric_id: impl Into<String>,
        periods: u32,
    ) -> Self {
        Selection {
            country_code: country_code.into(),
            metric_id: metric_id.into(),
            periods,
        }
    }
}

/// Identifies one issued cycle by the parameters it was issued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleToken {
    selection: Selection,
}

impl CycleToken {
    /// The parameters the fetch for this cycle must use.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// Everything one applied cycle contributes to the display.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleData {
    pub series: CanonicalSeries,
    pub summary: TrendSummary,
    pub last_updated: DateTime<Local>,
}

impl CycleData {
    /// Derive the display bundle from a freshly normalized series.
    pub fn new(series: CanonicalSeries) -> Self {
        let summary = analysis::analyze(&series);
        CycleData {
            series,
            summary,
            last_updated: Local::now(),
        }
    }
}

/// Front half of one cycle, free of controller state: resolve the metric to
/// its provider indicator code (unknown ids pass through unchanged), fetch,
/// and normalize.
pub fn fetch_series(client: &Client, selection: &Selection) -> Result<CanonicalSeries> {
    let indicator = catalog::metric(&selection.metric_id)
        .map(|m| m.indicator.to_string())
        .unwrap_or_else(|| selection.metric_id.clone());
    let raw = client.fetch(&selection.country_code, &indicator, selection.periods)?;
    series::normalize(&raw)
}

/// Single owner of all mutable dashboard state.
#[derive(Debug)]
pub struct Dashboard {
    selection: Selection,
    current: Option<CycleData>,
    last_error: Option<Error>,
}

impl Dashboard {
    pub fn new(selection: Selection) -> Self {
        Dashboard {
            selection,
            current: None,
            last_error: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Data of the most recently applied successful cycle, if any.
    pub fn data(&self) -> Option<&CycleData> {
        self.current.as_ref()
    }

    /// Error of the most recently applied failed cycle, if any.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Change the selected country and issue the token for the re-fetch
    /// this change triggers.
    pub fn select_country(&mut self, code: impl Into<String>) -> CycleToken {
        self.selection.country_code = code.into();
        self.begin()
    }

    /// Change the selected metric and issue the re-fetch token.
    pub fn select_metric(&mut self, id: impl Into<String>) -> CycleToken {
        self.selection.metric_id = id.into();
        self.begin()
    }

    /// Change the selected window and issue the re-fetch token.
    pub fn select_window(&mut self, periods: u32) -> CycleToken {
        self.selection.periods = periods;
        self.begin()
    }

    /// Issue a token for a manual re-run with unchanged parameters. Its
    /// completion still applies: the parameters still match.
    pub fn refresh(&self) -> CycleToken {
        self.begin()
    }

    fn begin(&self) -> CycleToken {
        CycleToken {
            selection: self.selection.clone(),
        }
    }

    /// Whether a completion for this token would still be applied: the
    /// token's parameters are compared against the current desired
    /// selection at completion time.
    pub fn is_current(&self, token: &CycleToken) -> bool {
        token.selection == self.selection
    }

    /// Apply a finished cycle.
    ///
    /// A stale token is discarded and leaves the displayed state untouched;
    /// returns whether the outcome was applied. An applied failure clears
    /// the displayed series: no partial results are ever surfaced.
    pub fn complete(&mut self, token: CycleToken, outcome: Result<CanonicalSeries>) -> bool {
        if !self.is_current(&token) {
            debug!(
                "discarding superseded cycle for {}/{}",
                token.selection.country_code, token.selection.metric_id
            );
            return false;
        }
        match outcome {
            Ok(s) => self.apply_data(CycleData::new(s)),
            Err(e) => self.apply_error(e),
        }
        true
    }

    /// Run one full blocking cycle for the current selection and apply it.
    pub fn run_cycle(&mut self, client: &Client) -> Result<CycleData> {
        let token = self.refresh();
        match fetch_series(client, token.selection()) {
            Ok(s) => {
                let data = CycleData::new(s);
                if self.is_current(&token) {
                    self.apply_data(data.clone());
                }
                Ok(data)
            }
            Err(e) => {
                if self.is_current(&token) {
                    self.apply_error(e.clone());
                }
                Err(e)
            }
        }
    }

    fn apply_data(&mut self, data: CycleData) {
        info!(
            "applied cycle: {} points for {}/{}",
            data.series.len(),
            self.selection.country_code,
            self.selection.metric_id
        );
        self.current = Some(data);
        self.last_error = None;
    }

    fn apply_error(&mut self, e: Error) {
        self.current = None;
        self.last_error = Some(e);
    }
}
