use serde::{Deserialize, Serialize};

/// Metadata section of the provider envelope (position 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub pages: u32,
    /// Some responses encode `per_page` as a string, others as a number.
    /// Accept both and normalize to `u32`.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    pub total: u32,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl<'de> Visitor<'de> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as u32)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for u32"));
            }
            Ok(v as u32)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

/// Paired id/label object used throughout the provider payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeName {
    pub id: String,
    pub value: String,
}

/// Raw observation exactly as the provider serializes it (position 1 array).
///
/// Untrusted input: `value` may be null, years may arrive newest-first or
/// duplicated. Nothing is cleaned up here; that is the normalizer's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPoint {
    pub indicator: CodeName,
    pub country: CodeName,
    pub countryiso3code: String,
    pub date: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub obs_status: Option<String>,
    pub decimal: Option<i32>,
}

impl RawPoint {
    /// Coerce the provider's `date` string to an integer year.
    /// Unparseable dates collapse to year 0 rather than failing the cycle.
    pub fn year(&self) -> i32 {
        self.date.trim().parse::<i32>().unwrap_or(0)
    }
}

/// One validated observation: the value is guaranteed present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// An ordered run of validated observations, ascending by year (ties keep
/// their original relative order, duplicates retained). Produced once per
/// analysis cycle and never mutated in place; downstream components derive
/// fresh values from it.
pub type CanonicalSeries = Vec<SeriesPoint>;
