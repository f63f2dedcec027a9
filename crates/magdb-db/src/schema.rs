//! Schema definitions for stored entries.
//!
//! Field names on disk are the column names of the published magnetism
//! collections ("Normalised Value", "DOI", ...).

use magdb_common::{DocumentInfo, Measurement, RecordType};

/// Collection name used when the configuration does not name one.
pub const DEFAULT_COLLECTION: &str = "posts";

// =============================================================================
// Entry Schema
// =============================================================================

/// One transition-temperature mention, normalised and merged with the
/// metadata of the article it came from.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub id: uuid::Uuid,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Names")]
    pub names: Vec<String>,
    #[serde(rename = "Extracted Value")]
    pub extracted_value: String,
    #[serde(rename = "Extracted Units")]
    pub extracted_units: Option<String>,
    #[serde(rename = "Normalised Value")]
    pub normalised_value: Option<String>,
    #[serde(rename = "Normalised Units")]
    pub normalised_units: Option<String>,
    #[serde(rename = "Confidence")]
    pub confidence: Option<f64>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Authors", default)]
    pub authors: Vec<String>,
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,
    #[serde(rename = "Journal", default)]
    pub journal: Option<String>,
    pub ingested_at: chrono::DateTime<chrono::Utc>,
}

impl Entry {
    /// Build an entry for `measurement` with empty normalised fields and no
    /// document metadata.
    pub fn new(record_type: RecordType, names: Vec<String>, measurement: &Measurement) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            record_type: record_type.label().to_string(),
            names,
            extracted_value: measurement.value.clone(),
            extracted_units: measurement.units.clone(),
            normalised_value: None,
            normalised_units: None,
            confidence: measurement.confidence,
            title: None,
            authors: Vec::new(),
            doi: None,
            journal: None,
            ingested_at: chrono::Utc::now(),
        }
    }

    pub fn with_normalised(mut self, value: Option<String>, units: Option<String>) -> Self {
        self.normalised_value = value;
        self.normalised_units = units;
        self
    }

    /// Copy title, authors, DOI and journal from the source document.
    pub fn with_document_info(mut self, info: &DocumentInfo) -> Self {
        self.title = info.title.clone();
        self.authors = info.authors.clone();
        self.doi = info.doi.clone();
        self.journal = info.journal.clone();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        let m = Measurement::new("27", Some("°C")).with_confidence(0.9);
        Entry::new(RecordType::Curie, vec!["Fe3O4".to_string()], &m)
            .with_normalised(Some("300".to_string()), Some("K".to_string()))
    }

    #[test]
    fn test_new_entry_copies_measurement() {
        let e = sample();
        assert_eq!(e.record_type, "Curie");
        assert_eq!(e.extracted_value, "27");
        assert_eq!(e.extracted_units.as_deref(), Some("°C"));
        assert_eq!(e.confidence, Some(0.9));
        assert_eq!(e.normalised_units.as_deref(), Some("K"));
    }

    #[test]
    fn test_document_info_merge() {
        let info = DocumentInfo {
            title: Some("Magnetic order in magnetite".to_string()),
            authors: vec!["A. Author".to_string(), "B. Author".to_string()],
            doi: Some("10.1039/c0xx00000a".to_string()),
            journal: Some("J. Mater. Chem.".to_string()),
        };
        let e = sample().with_document_info(&info);
        assert_eq!(e.title, info.title);
        assert_eq!(e.authors.len(), 2);
        assert_eq!(e.doi.as_deref(), Some("10.1039/c0xx00000a"));
    }

    #[test]
    fn test_serialised_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Type"], "Curie");
        assert_eq!(json["Normalised Value"], "300");
        assert_eq!(json["Normalised Units"], "K");
        assert_eq!(json["Extracted Units"], "°C");
        assert!(json.get("DOI").is_some());
    }

    #[test]
    fn test_failed_normalisation_keeps_extracted_value() {
        let m = Measurement::new("50", Some("Torr"));
        let e = Entry::new(RecordType::Neel, vec![], &m).with_normalised(None, None);
        assert!(e.normalised_value.is_none());
        assert_eq!(e.extracted_value, "50");
    }
}
