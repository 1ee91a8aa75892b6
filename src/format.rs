//! Display formatting for metric values.
//!
//! Each metric formats through a magnitude rule looked up by metric id in a
//! registry; new metrics register a rule instead of growing a conditional.
//! A missing, null, or exactly-zero value always renders `"N/A"` (zero is
//! indistinguishable from absence by contract).

use crate::catalog::{self, FormatRule};
use num_format::{Locale, ToFormattedString};
use std::collections::HashMap;

/// A pure formatting rule: non-zero numeric value in, display string out.
pub type FormatFn = fn(f64) -> String;

/// Currency with trillion/billion/million scaling, two decimals.
/// Values under one million still render in millions.
pub fn currency_magnitude(v: f64) -> String {
    if v >= 1.0e12 {
        format!("${:.2}T", v / 1.0e12)
    } else if v >= 1.0e9 {
        format!("${:.2}B", v / 1.0e9)
    } else {
        format!("${:.2}M", v / 1.0e6)
    }
}

/// Currency with thousands grouping and no magnitude suffix.
pub fn currency_grouped(v: f64) -> String {
    format!("${}", grouped(v))
}

/// Plain count with billion/million scaling, grouped below a million.
pub fn count_magnitude(v: f64) -> String {
    if v >= 1.0e9 {
        format!("{:.2}B", v / 1.0e9)
    } else if v >= 1.0e6 {
        format!("{:.2}M", v / 1.0e6)
    } else {
        grouped(v)
    }
}

/// Locale-style rendering: grouped integer part, at most three fraction
/// digits, trailing zeros trimmed.
pub fn grouped(v: f64) -> String {
    let negative = v < 0.0;
    let s = format!("{:.3}", v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some(parts) => parts,
        None => (s.as_str(), ""),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    match int_part.parse::<u128>() {
        Ok(n) => out.push_str(&n.to_formatted_string(&Locale::en)),
        Err(_) => out.push_str(int_part),
    }
    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Implementation behind a catalog rule tag.
pub fn rule_fn(rule: FormatRule) -> FormatFn {
    match rule {
        FormatRule::CurrencyMagnitude => currency_magnitude,
        FormatRule::CurrencyGrouped => currency_grouped,
        FormatRule::CountMagnitude => count_magnitude,
    }
}

/// Registry mapping metric ids to formatting rules.
///
/// `Default` seeds the fixed catalog metrics; callers may register further
/// metrics without touching any other component.
pub struct Formatter {
    rules: HashMap<String, FormatFn>,
}

impl Default for Formatter {
    fn default() -> Self {
        let mut f = Formatter {
            rules: HashMap::new(),
        };
        for m in catalog::METRICS {
            f.register(m.id, rule_fn(m.rule));
        }
        f
    }
}

impl Formatter {
    /// Register (or replace) the rule for a metric id.
    pub fn register(&mut self, metric_id: impl Into<String>, rule: FormatFn) {
        self.rules.insert(metric_id.into(), rule);
    }

    /// Render a value for display.
    ///
    /// Missing, null, zero, and NaN values render `"N/A"`; unknown metric
    /// ids fall back to plain locale grouping. Negative values pass through
    /// the magnitude rules unharmed (they simply miss every threshold).
    pub fn format(&self, value: Option<f64>, metric_id: &str) -> String {
        let v = match value {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => return "N/A".to_string(),
        };
        match self.rules.get(metric_id) {
            Some(rule) => rule(v),
            None => grouped(v),
        }
    }
}

/// One-off convenience over the default registry.
pub fn format_value(value: Option<f64>, metric_id: &str) -> String {
    Formatter::default().format(value, metric_id)
}
