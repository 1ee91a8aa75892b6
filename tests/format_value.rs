use ecodash::format::{Formatter, grouped};
use ecodash::format_value;

#[test]
fn gdp_scales_largest_magnitude_first() {
    assert_eq!(format_value(Some(3.73e12), "GDP"), "$3.73T");
    assert_eq!(format_value(Some(1.0e12), "GDP"), "$1.00T");
    assert_eq!(format_value(Some(1.5e9), "GDP"), "$1.50B");
    assert_eq!(format_value(Some(2.0e6), "GDP"), "$2.00M");
}

#[test]
fn gdp_below_a_million_still_renders_in_millions() {
    assert_eq!(format_value(Some(999_999.0), "GDP"), "$1.00M");
    assert_eq!(format_value(Some(500_000.0), "GDP"), "$0.50M");
}

#[test]
fn missing_and_zero_render_not_available() {
    assert_eq!(format_value(None, "GDP"), "N/A");
    assert_eq!(format_value(Some(0.0), "GDP"), "N/A");
    assert_eq!(format_value(Some(0.0), "POP"), "N/A");
    assert_eq!(format_value(Some(f64::NAN), "GDP"), "N/A");
}

#[test]
fn per_capita_groups_without_suffix() {
    assert_eq!(format_value(Some(2410.89), "GDPPC"), "$2,410.89");
    assert_eq!(format_value(Some(65_120.5), "GDPPC"), "$65,120.5");
    assert_eq!(format_value(Some(850.0), "GDPPC"), "$850");
}

#[test]
fn population_scales_or_groups() {
    assert_eq!(format_value(Some(2.5e9), "POP"), "2.50B");
    assert_eq!(format_value(Some(83_100_000.0), "POP"), "83.10M");
    assert_eq!(format_value(Some(500_000.0), "POP"), "500,000");
}

#[test]
fn negative_values_pass_through_the_rules() {
    // A negative value misses every magnitude threshold and lands in the
    // smallest branch.
    assert_eq!(format_value(Some(-5.0e9), "GDP"), "$-5000.00M");
    assert_eq!(format_value(Some(-1234.5), "GDPPC"), "$-1,234.5");
}

#[test]
fn unknown_metric_falls_back_to_grouping() {
    assert_eq!(format_value(Some(1_234_567.0), "CO2"), "1,234,567");
}

#[test]
fn registry_accepts_new_rules() {
    let mut f = Formatter::default();
    f.register("CO2", |v| format!("{v} t"));
    assert_eq!(f.format(Some(12.5), "CO2"), "12.5 t");
    // The seeded metrics are untouched.
    assert_eq!(f.format(Some(1.0e12), "GDP"), "$1.00T");
}

#[test]
fn grouping_trims_trailing_zeros() {
    assert_eq!(grouped(1234.500), "1,234.5");
    assert_eq!(grouped(1234.0), "1,234");
    assert_eq!(grouped(0.125), "0.125");
}
