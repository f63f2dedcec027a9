//! Transition-temperature normalisation to Kelvin.
//!
//! Extracted values arrive as free text in whatever notation the article
//! used. The shape of the value is preserved while its unit is converted:
//!
//! | input              | output                      |
//! |--------------------|-----------------------------|
//! | `27 °C`            | `300 K`                     |
//! | `10-20 °C`         | `283-293 K`                 |
//! | `100±5 °C`         | `373±5 K`                   |
//! | `100±5 °F`         | `310.7777777778±2.7777777778 K` |
//! | `≈50 °C`           | `≈323 K`                    |
//! | `500 mK`           | `0.5 K`                     |
//!
//! # Example
//! ```
//! use magdb_ingestion::normalise::normalise_temperature;
//!
//! let n = normalise_temperature("10-20", Some("°C"));
//! assert_eq!(n.value.as_deref(), Some("283-293"));
//! assert_eq!(n.units.as_deref(), Some("K"));
//! ```

use std::sync::OnceLock;

use magdb_common::Measurement;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{parse_number, split_predicate, TemperatureUnit, DASHES, PLUS_MINUS};

/// Canonical unit token for every converted value.
pub const KELVIN_UNIT: &str = "K";

/// Why a value/unit pair could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormaliseError {
    #[error("unrecognised temperature unit {0:?}")]
    UnrecognizedUnit(String),

    #[error("unparseable temperature value {0:?}")]
    UnparseableNumeric(String),
}

/// Result of normalising one measurement.
///
/// Converted values carry `units == Some("K")`; a failed conversion has
/// both fields `None`. Pass-through cases (no unit, already Kelvin) echo
/// the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalisedTemperature {
    pub value: Option<String>,
    pub units: Option<String>,
}

impl NormalisedTemperature {
    fn kelvin(value: String) -> Self {
        Self { value: Some(value), units: Some(KELVIN_UNIT.to_string()) }
    }

    fn unchanged(value: &str, units: Option<&str>) -> Self {
        Self { value: Some(value.to_string()), units: units.map(str::to_string) }
    }

    /// The `(None, None)` sentinel.
    pub fn failed() -> Self {
        Self { value: None, units: None }
    }

    pub fn is_failed(&self) -> bool {
        self.value.is_none() && self.units.is_none()
    }
}

struct Patterns {
    range: Regex,
    plus_minus: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let dash = char_class(DASHES);
        let pm = char_class(PLUS_MINUS);
        Patterns {
            // 10-20, −20–−10
            range: Regex::new(&format!(
                r"^({dash}?[0-9.]+)\s*{dash}\s*({dash}?[0-9.]+)$"
            ))
            .expect("range pattern compiles"),
            // 100±5, 100 ∓ 0.5
            plus_minus: Regex::new(&format!(r"^({dash}?[0-9.]+)\s*{pm}\s*([0-9.]+)$"))
                .expect("plus-minus pattern compiles"),
        }
    })
}

fn char_class(chars: &[char]) -> String {
    let mut class = String::from("[");
    for c in chars {
        class.push_str(&regex::escape(&c.to_string()));
    }
    class.push(']');
    class
}

/// Normalise a value/unit pair, mapping every failure to the
/// `(None, None)` sentinel.
pub fn normalise_temperature(value: &str, units: Option<&str>) -> NormalisedTemperature {
    match try_normalise(value, units) {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(value, units = ?units, error = %e, "Could not normalise temperature");
            NormalisedTemperature::failed()
        }
    }
}

/// Normalise an extracted measurement.
pub fn normalise_measurement(m: &Measurement) -> NormalisedTemperature {
    normalise_temperature(&m.value, m.units.as_deref())
}

/// Normalise a value/unit pair, reporting why conversion failed.
pub fn try_normalise(
    value: &str,
    units: Option<&str>,
) -> Result<NormalisedTemperature, NormaliseError> {
    let symbol = match units {
        Some(u) if !u.trim().is_empty() => u,
        _ => return Ok(NormalisedTemperature::unchanged(value, units)),
    };

    let unit = TemperatureUnit::from_symbol(symbol)
        .ok_or_else(|| NormaliseError::UnrecognizedUnit(symbol.to_string()))?;

    match unit {
        TemperatureUnit::Kelvin => Ok(NormalisedTemperature::unchanged(value, units)),
        // mK only accepts a plain number.
        TemperatureUnit::MilliKelvin => {
            let x = parse_number(value)
                .ok_or_else(|| NormaliseError::UnparseableNumeric(value.to_string()))?;
            Ok(NormalisedTemperature::kelvin(format_kelvin(unit.to_kelvin(x))))
        }
        TemperatureUnit::Celsius | TemperatureUnit::Fahrenheit => {
            let (predicate, body) = split_predicate(value.trim());
            let converted = convert_shaped(body.trim(), unit)?;
            Ok(NormalisedTemperature::kelvin(match predicate {
                Some(p) => format!("{p}{converted}"),
                None => converted,
            }))
        }
    }
}

/// Convert a range, error-bar or single value on a degree scale.
fn convert_shaped(body: &str, unit: TemperatureUnit) -> Result<String, NormaliseError> {
    debug_assert!(unit.is_degree_scale());
    let unparseable = || NormaliseError::UnparseableNumeric(body.to_string());
    let number = |text: &str| parse_number(text).ok_or_else(unparseable);
    let p = patterns();

    if let Some(caps) = p.range.captures(body) {
        let lower = unit.to_kelvin(number(&caps[1])?);
        let upper = unit.to_kelvin(number(&caps[2])?);
        return Ok(format!("{}-{}", format_kelvin(lower), format_kelvin(upper)));
    }

    if let Some(caps) = p.plus_minus.captures(body) {
        let center = number(&caps[1])?;
        let error_text = caps[2].trim();
        let error = number(error_text)?;

        return Ok(match unit {
            // Interval widths are unchanged by an additive offset.
            TemperatureUnit::Celsius => {
                format!("{}±{}", format_kelvin(unit.to_kelvin(center)), error_text)
            }
            // The 5/9 factor scales the error, so convert both bounds and
            // take midpoint and half-span.
            _ => {
                let lower = unit.to_kelvin(center - error);
                let upper = unit.to_kelvin(center + error);
                let center_k = (lower + upper) / 2.0;
                let error_k = (upper - lower) / 2.0;
                format!("{}±{}", format_kelvin(center_k), format_kelvin(error_k))
            }
        });
    }

    Ok(format_kelvin(unit.to_kelvin(number(body)?)))
}

/// Render a Kelvin value, trimming float noise past ten decimal places.
fn format_kelvin(x: f64) -> String {
    let rounded = (x * 1e10).round() / 1e10;
    if rounded == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    format!("{rounded}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
