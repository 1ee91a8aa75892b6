//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use ecodash::Client;
use ecodash::series::normalize;

#[test]
fn fetch_small_window() {
    let cli = Client::default();
    let raw = cli.fetch("DE", "SP.POP.TOTL", 5).unwrap();
    assert!(!raw.is_empty());
    assert!(raw.len() <= 5);
    assert!(raw.iter().all(|p| p.countryiso3code == "DEU"));

    let series = normalize(&raw).unwrap();
    assert!(series.windows(2).all(|w| w[0].year <= w[1].year));
}

#[test]
fn fetch_gdp_for_india() {
    let cli = Client::default();
    let raw = cli.fetch("IN", "NY.GDP.MKTP.CD", 10).unwrap();
    assert!(!raw.is_empty());
    assert!(raw.iter().all(|p| p.indicator.id == "NY.GDP.MKTP.CD"));
}
