//! Unit spellings and glyph tables used by the temperature normaliser.
//!
//! Extracted text uses many look-alike code points for the same symbol
//! (hyphen vs. en dash vs. minus sign, `°C` vs. `℃`). Every accepted
//! spelling is listed here; anything else is rejected.

/// Leading glyphs marking a value as approximate or bounded.
pub const PREDICATES: &[char] = &[
    '\u{02DC}', // ˜ small tilde
    '\u{007E}', // ~ tilde
    '\u{0334}', // combining tilde overlay
    '\u{0336}', // combining long stroke overlay
    '\u{223D}', // ∽ reversed tilde
    '\u{223C}', // ∼ tilde operator
    '\u{FF5E}', // ～ fullwidth tilde
    '\u{2245}', // ≅
    '\u{2246}', // ≆
    '\u{2248}', // ≈
    '\u{2A85}', // ⪅
    '\u{2A86}', // ⪆
    '\u{2265}', // ≥
    '\u{2267}', // ≧
    '\u{226B}', // ≫
    '\u{2273}', // ≳
    '\u{2264}', // ≤
    '\u{2266}', // ≦
    '\u{226A}', // ≪
    '\u{2272}', // ≲
];

/// Range separators; also accepted as a leading minus sign.
pub const DASHES: &[char] = &[
    '\u{002D}', // - hyphen-minus
    '\u{00AD}', // soft hyphen
    '\u{1806}', // mongolian todo soft hyphen
    '\u{2010}', // ‐ hyphen
    '\u{2011}', // ‑ non-breaking hyphen
    '\u{2043}', // ⁃ hyphen bullet
    '\u{FE63}', // ﹣ small hyphen-minus
    '\u{2013}', // – en dash
    '\u{2014}', // — em dash
    '\u{FF0D}', // － fullwidth hyphen-minus
    '\u{2212}', // − minus sign
    '\u{02D7}', // ˗ modifier letter minus
];

/// Separators between a central value and its error bound.
pub const PLUS_MINUS: &[char] = &['±', '∓', '⨤', '⨦'];

pub const KELVIN: &[&str] = &["K", "K.", "θ"];
pub const MILLIKELVIN: &[&str] = &["mK", "mK."];
pub const CELSIUS: &[&str] = &["°C", "C", "\u{02DA}C", "℃"];
pub const FAHRENHEIT: &[&str] = &["°F", "F", "\u{02DA}F", "℉"];

/// Temperature scales the normaliser knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    MilliKelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Classify a unit symbol. Surrounding whitespace is ignored; the
    /// symbol itself must match one of the listed spellings exactly.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let s = symbol.trim();
        if KELVIN.contains(&s) {
            Some(TemperatureUnit::Kelvin)
        } else if MILLIKELVIN.contains(&s) {
            Some(TemperatureUnit::MilliKelvin)
        } else if CELSIUS.contains(&s) {
            Some(TemperatureUnit::Celsius)
        } else if FAHRENHEIT.contains(&s) {
            Some(TemperatureUnit::Fahrenheit)
        } else {
            None
        }
    }

    /// Convert a value on this scale to Kelvin.
    ///
    /// Celsius uses the 273 offset stored by the database, not 273.15.
    pub fn to_kelvin(self, x: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin      => x,
            TemperatureUnit::MilliKelvin => x / 1000.0,
            TemperatureUnit::Celsius     => x + 273.0,
            TemperatureUnit::Fahrenheit  => (x - 32.0) * 5.0 / 9.0 + 273.0,
        }
    }

    /// Scales whose shaped values (ranges, error bars, predicates) are converted.
    pub fn is_degree_scale(self) -> bool {
        matches!(self, TemperatureUnit::Celsius | TemperatureUnit::Fahrenheit)
    }
}

/// Split a single leading predicate glyph off `value`.
pub fn split_predicate(value: &str) -> (Option<char>, &str) {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if PREDICATES.contains(&c) => (Some(c), chars.as_str()),
        _ => (None, value),
    }
}

/// Parse a plain decimal with an optional leading dash-variant sign.
///
/// Only ASCII digits and a decimal point are accepted after the sign, so
/// `inf`, `NaN` and exponent forms are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let mut chars = text.chars();
    let (negative, digits) = match chars.next() {
        Some(c) if DASHES.contains(&c) => (true, chars.as_str()),
        Some(_) => (false, text),
        None => return None,
    };

    if !digits.bytes().any(|b| b.is_ascii_digit())
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    {
        return None;
    }

    let magnitude: f64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
