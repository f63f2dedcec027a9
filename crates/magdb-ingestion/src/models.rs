//! Data models for the ingestion pipeline.

use magdb_common::Measurement;
use serde::{Deserialize, Serialize};

/// A chemical compound as emitted by the upstream record extractor,
/// with the transition temperatures reported for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub neel_temperatures: Vec<Measurement>,
    #[serde(default)]
    pub curie_temperatures: Vec<Measurement>,
}

impl Compound {
    /// Records without any compound name cannot be attributed and are skipped.
    pub fn has_names(&self) -> bool {
        self.names.iter().any(|n| !n.trim().is_empty())
    }

    pub fn measurement_count(&self) -> usize {
        self.neel_temperatures.len() + self.curie_temperatures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_unnamed() {
        let c = Compound { names: vec!["  ".to_string()], ..Default::default() };
        assert!(!c.has_names());
        assert!(!Compound::default().has_names());
    }

    #[test]
    fn test_deserialise_partial_compound() {
        let c: Compound = serde_json::from_str(
            r#"{"names": ["NiO"], "neel_temperatures": [{"value": "523", "units": "K"}]}"#,
        )
        .unwrap();
        assert!(c.has_names());
        assert_eq!(c.measurement_count(), 1);
        assert!(c.curie_temperatures.is_empty());
    }
}
