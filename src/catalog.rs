//! Fixed selection sets offered by the shell: countries, metrics, and
//! time windows. The core treats the identifiers as opaque; these tables
//! only exist so callers can enumerate choices and resolve display names.

use serde::{Deserialize, Serialize};

/// A selectable country (two-letter provider code plus display decoration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "IN", name: "India", flag: "🇮🇳" },
    Country { code: "US", name: "United States", flag: "🇺🇸" },
    Country { code: "CN", name: "China", flag: "🇨🇳" },
    Country { code: "JP", name: "Japan", flag: "🇯🇵" },
    Country { code: "DE", name: "Germany", flag: "🇩🇪" },
    Country { code: "GB", name: "United Kingdom", flag: "🇬🇧" },
    Country { code: "BR", name: "Brazil", flag: "🇧🇷" },
    Country { code: "NG", name: "Nigeria", flag: "🇳🇬" },
    Country { code: "FR", name: "France", flag: "🇫🇷" },
    Country { code: "IT", name: "Italy", flag: "🇮🇹" },
];

/// Magnitude rule a metric's values are rendered with (see [`crate::format`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatRule {
    /// Currency with trillion/billion/million scaling (`$1.23T`).
    CurrencyMagnitude,
    /// Currency with thousands grouping and no suffix (`$65,123.45`).
    CurrencyGrouped,
    /// Plain count with billion/million scaling, grouped below a million.
    CountMagnitude,
}

/// One entry of the fixed metric set: display metadata plus the provider
/// indicator code and the formatting rule its values use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub indicator: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub rule: FormatRule,
}

pub const METRICS: &[MetricDescriptor] = &[
    MetricDescriptor {
        id: "GDP",
        name: "GDP (Current USD)",
        indicator: "NY.GDP.MKTP.CD",
        icon: "💰",
        description: "Gross Domestic Product at current market prices",
        rule: FormatRule::CurrencyMagnitude,
    },
    MetricDescriptor {
        id: "GDPPC",
        name: "GDP per Capita",
        indicator: "NY.GDP.PCAP.CD",
        icon: "👤",
        description: "GDP divided by midyear population",
        rule: FormatRule::CurrencyGrouped,
    },
    MetricDescriptor {
        id: "POP",
        name: "Population",
        indicator: "SP.POP.TOTL",
        icon: "🌍",
        description: "Total population count",
        rule: FormatRule::CountMagnitude,
    },
];

/// Selectable window sizes: the N most recent reporting periods.
pub const WINDOWS: &[u32] = &[5, 10, 20];

/// Resolve a country by its two-letter code (case-insensitive).
pub fn country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Resolve a metric by id (case-insensitive).
pub fn metric(id: &str) -> Option<&'static MetricDescriptor> {
    METRICS.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}
