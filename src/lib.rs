//! ecodash
//!
//! A lightweight Rust library for fetching, analyzing, and exporting World
//! Bank economic indicators. Pairs with the `ecodash` CLI.
//!
//! ### Features
//! - Fetch one indicator series for a country over a recent-years window
//! - Normalize provider records into a clean, chronologically sorted series
//! - Trend analysis: latest value, absolute and percent change, direction
//! - Metric-aware value formatting (magnitude suffixes, digit grouping)
//! - Sparkline geometry with SVG rendering
//! - Spreadsheet-ready CSV export plus tidy CSV/JSON storage
//!
//! ### Example
//! ```no_run
//! use ecodash::controller::{Dashboard, Selection};
//! use ecodash::{Client, format_value};
//!
//! let client = Client::default();
//! let mut dash = Dashboard::new(Selection::new("IN", "GDP", 10));
//! let data = dash.run_cycle(&client)?;
//! println!(
//!     "latest: {}",
//!     format_value(data.summary.latest.map(|p| p.value), "GDP")
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod series;
pub mod sparkline;
pub mod storage;

pub use api::Client;
pub use error::{Error, Result};
pub use format::format_value;
pub use models::{CanonicalSeries, SeriesPoint};
