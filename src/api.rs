//! Synchronous client for the **World Bank Indicators API (v2)**.
//!
//! One analysis cycle issues exactly one GET against the
//! `country/{code}/indicator/{code}` endpoint, asking for the N most recent
//! reporting periods via `per_page`. The response envelope is a two-element
//! JSON array `[meta, records]`.
//!
//! ### Notes
//! - The API sometimes serializes `per_page` as a **string**; both
//!   string and number are accepted (see [`crate::models::Meta`]).
//! - Failures are terminal for the cycle: no retry, no caching. The caller
//!   re-runs the cycle on a manual refresh.
//!
//! Typical usage:
//! ```no_run
//! # use ecodash::Client;
//! let client = Client::default();
//! let raw = client.fetch("IN", "NY.GDP.MKTP.CD", 10)?;
//! # Ok::<(), ecodash::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::{Meta, RawPoint};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Allow -, _, . unescaped in codes (common for indicator ids).
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(code: &str) -> String {
    percent_encoding::utf8_percent_encode(code.trim(), SAFE).to_string()
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("ecodash/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.worldbank.org/v2".into(),
            http,
        }
    }
}

impl Client {
    /// Fetch the raw observations for one (country, indicator) pair.
    ///
    /// ### Arguments
    /// - `country_code`: two-letter provider code (e.g. `"IN"`, `"US"`).
    /// - `indicator_code`: opaque provider indicator id
    ///   (e.g. `"SP.POP.TOTL"`).
    /// - `periods`: positive count of most-recent reporting periods to
    ///   request. The enumeration of valid values is the shell's concern;
    ///   identifiers are passed through untouched.
    ///
    /// ### Returns
    /// The raw, unordered, possibly null-valued points exactly as the
    /// provider sent them. Feed them to [`crate::series::normalize`].
    ///
    /// ### Errors
    /// - [`Error::Transport`] on network failure or non-success status
    /// - [`Error::Decode`] when the envelope does not parse
    /// - [`Error::EmptyResult`] when the record list is empty or absent
    pub fn fetch(
        &self,
        country_code: &str,
        indicator_code: &str,
        periods: u32,
    ) -> Result<Vec<RawPoint>> {
        let url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page={}",
            self.base_url,
            enc(country_code),
            enc(indicator_code),
            periods
        );
        debug!("GET {url}");

        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Transport(format!(
                "request failed with HTTP {status}"
            )));
        }

        let body = resp.text()?;
        let v: Value = serde_json::from_str(&body)?;
        decode_envelope(&v)
    }
}

/// Interpret the provider's `[meta, records]` envelope.
///
/// The provider reports request-level errors (bad codes and the like) as a
/// one-element envelope whose head carries a `message` array, still under a
/// 200 status; the record list is absent in that shape and it is treated as
/// an empty result.
pub fn decode_envelope(v: &Value) -> Result<Vec<RawPoint>> {
    let arr = v
        .as_array()
        .ok_or_else(|| Error::Decode("not a top-level array".into()))?;
    let head = arr
        .first()
        .ok_or_else(|| Error::Decode("empty envelope".into()))?;

    if let Some(msg) = head.get("message") {
        warn!("provider error payload: {msg}");
        return Err(Error::EmptyResult);
    }

    let meta: Meta = serde_json::from_value(head.clone())?;
    debug!(
        "provider meta: page {}/{}, per_page {}, total {}",
        meta.page, meta.pages, meta.per_page, meta.total
    );

    let records: Vec<RawPoint> = match arr.get(1) {
        Some(list) if !list.is_null() => serde_json::from_value(list.clone())?,
        _ => vec![],
    };
    if records.is_empty() {
        return Err(Error::EmptyResult);
    }
    Ok(records)
}
