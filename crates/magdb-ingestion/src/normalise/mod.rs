//! Temperature normalisation.
//!
//! - `units`: accepted unit spellings, predicate and separator glyphs
//! - `temperature`: shape-preserving conversion of extracted values to Kelvin

pub mod temperature;
pub mod units;

pub use temperature::{
    normalise_measurement, normalise_temperature, try_normalise, NormaliseError,
    NormalisedTemperature, KELVIN_UNIT,
};
pub use units::TemperatureUnit;
