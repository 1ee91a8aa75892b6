use ecodash::SeriesPoint;
use ecodash::analysis::{Trend, analyze, change_rows};

fn pt(year: i32, value: f64) -> SeriesPoint {
    SeriesPoint { year, value }
}

#[test]
fn growth_and_delta_for_rising_series() {
    let s = vec![pt(2021, 200.0), pt(2022, 250.0)];
    let t = analyze(&s);
    assert_eq!(t.latest, Some(pt(2022, 250.0)));
    assert_eq!(t.change_absolute, 50.0);
    assert_eq!(t.growth_rate_percent, 25.0);
    assert_eq!(t.trend, Trend::Up);
}

#[test]
fn falling_series_classifies_down() {
    let t = analyze(&[pt(2021, 100.0), pt(2022, 90.0)]);
    assert_eq!(t.trend, Trend::Down);
    assert_eq!(t.growth_rate_percent, -10.0);
    assert_eq!(t.change_absolute, -10.0);
}

#[test]
fn flat_series_classifies_neutral() {
    let t = analyze(&[pt(2021, 7.0), pt(2022, 7.0)]);
    assert_eq!(t.trend, Trend::Neutral);
    assert_eq!(t.growth_rate_percent, 0.0);
    assert_eq!(t.change_absolute, 0.0);
}

#[test]
fn zero_previous_guards_division() {
    // Rate stays 0 (no NaN/Infinity), the delta is still reported.
    let t = analyze(&[pt(2021, 0.0), pt(2022, 500.0)]);
    assert_eq!(t.growth_rate_percent, 0.0);
    assert_eq!(t.trend, Trend::Neutral);
    assert_eq!(t.change_absolute, 500.0);
}

#[test]
fn short_series_degrade_to_flat() {
    let empty = analyze(&[]);
    assert_eq!(empty.latest, None);
    assert_eq!(empty.trend, Trend::Neutral);
    assert_eq!(empty.change_absolute, 0.0);

    let single = analyze(&[pt(2022, 42.0)]);
    assert_eq!(single.latest, Some(pt(2022, 42.0)));
    assert_eq!(single.trend, Trend::Neutral);
    assert_eq!(single.growth_rate_percent, 0.0);
}

#[test]
fn trend_sign_has_no_epsilon() {
    assert_eq!(Trend::from_rate(1e-12), Trend::Up);
    assert_eq!(Trend::from_rate(-1e-12), Trend::Down);
    assert_eq!(Trend::from_rate(0.0), Trend::Neutral);
}

#[test]
fn change_rows_follow_series_order() {
    let s = vec![pt(2020, 100.0), pt(2021, 110.0), pt(2022, 99.0)];
    let rows = change_rows(&s);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].change_percent, None);
    assert_eq!(rows[1].change_percent, Some(10.0));
    assert_eq!(rows[2].change_percent, Some(-10.0));
}

#[test]
fn change_rows_skip_zero_previous() {
    let rows = change_rows(&[pt(2020, 0.0), pt(2021, 5.0)]);
    assert_eq!(rows[1].change_percent, None);
}
