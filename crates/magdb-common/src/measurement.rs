//! Raw measurement and document types shared by the extractor boundary,
//! the ingestion pipeline and the entry store.

use serde::{Deserialize, Deserializer, Serialize};

/// A single temperature mention as reported by the upstream extractor.
///
/// `value` is free-form text: a number, a range, a value with an error
/// bar, or any of those behind a comparison predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(deserialize_with = "value_text")]
    pub value: String,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Measurement {
    pub fn new(value: impl Into<String>, units: Option<&str>) -> Self {
        Self {
            value: value.into(),
            units: units.map(str::to_string),
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// Extractors emit bare numbers for simple values and strings for
/// everything else; both are kept as text.
fn value_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => s,
        RawValue::Number(n) => n.to_string(),
    })
}

/// Magnetic transition kinds tracked by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Neel,
    Curie,
}

impl RecordType {
    pub const ALL: [RecordType; 2] = [RecordType::Neel, RecordType::Curie];

    /// Tag written into the `Type` field of a stored entry.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Neel  => "Néel",
            RecordType::Curie => "Curie",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Neel  => "neel",
            RecordType::Curie => "curie",
        }
    }
}

/// Bibliographic metadata merged into every entry built from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
}
