//! Extracted-document loading and document-info merge.
//!
//! The scraper and record extractor run upstream and write one JSON file
//! per article:
//!
//! ```json
//! {
//!   "info":    { "title": "...", "authors": ["..."], "doi": "...", "journal": "..." },
//!   "records": [ { "names": ["NiO"], "neel_temperatures": [{ "value": "250", "units": "°C" }] } ]
//! }
//! ```

use std::path::{Path, PathBuf};

use magdb_common::{DocumentInfo, RecordType};
use magdb_db::Entry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Compound;
use crate::records::TransitionRecord;

/// File extensions accepted by [`Document::from_file`].
pub const DOCUMENT_EXTENSIONS: &[&str] = &["json"];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An article's extracted compounds together with its metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, alias = "document_info")]
    pub info: DocumentInfo,
    #[serde(default, alias = "chemical_records")]
    pub records: Vec<Compound>,
}

impl Document {
    /// Parse a document, dropping compounds that carry no name.
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        let mut doc: Document = serde_json::from_str(content)?;
        let before = doc.records.len();
        doc.records.retain(Compound::has_names);
        if doc.records.len() < before {
            tracing::debug!(removed = before - doc.records.len(), "Removed unnamed records");
        }
        Ok(doc)
    }

    /// Load a document from an extracted-document file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }
        if !is_document_file(path) {
            return Err(DocumentError::UnsupportedFormat(path.to_path_buf()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    /// Build entries for every compound and requested record type, with
    /// this document's metadata merged in.
    pub fn entries(&self, record_types: &[RecordType]) -> Vec<Entry> {
        let mut out = Vec::new();
        for compound in &self.records {
            for &record_type in record_types {
                let record = TransitionRecord::from_compound(record_type, compound);
                out.extend(
                    record
                        .entries(&compound.names)
                        .into_iter()
                        .map(|e| e.with_document_info(&self.info)),
                );
            }
        }
        out
    }
}

/// True for paths whose extension is a supported document format.
pub fn is_document_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| DOCUMENT_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "info": {
            "title": "Magnetic ordering in transition-metal oxides",
            "authors": ["J. Smith", "L. Chen"],
            "doi": "10.1021/acs.chemmater.0c00001",
            "journal": "Chem. Mater."
        },
        "records": [
            {
                "names": ["NiO"],
                "neel_temperatures": [{"value": "250", "units": "°C", "confidence": 0.9}]
            },
            {
                "names": ["CrO2"],
                "curie_temperatures": [{"value": "≈120", "units": "°C"}]
            },
            {
                "names": [],
                "curie_temperatures": [{"value": "300", "units": "K"}]
            }
        ]
    }"#;

    #[test]
    fn test_unnamed_records_removed() {
        let doc = Document::from_json(SAMPLE).unwrap();
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.info.journal.as_deref(), Some("Chem. Mater."));
    }

    #[test]
    fn test_entries_merge_document_info() {
        let doc = Document::from_json(SAMPLE).unwrap();
        let entries = doc.entries(&RecordType::ALL);
        assert_eq!(entries.len(), 2);

        let neel = &entries[0];
        assert_eq!(neel.record_type, "Néel");
        assert_eq!(neel.normalised_value.as_deref(), Some("523"));
        assert_eq!(neel.doi.as_deref(), Some("10.1021/acs.chemmater.0c00001"));
        assert_eq!(neel.authors, vec!["J. Smith", "L. Chen"]);

        let curie = &entries[1];
        assert_eq!(curie.record_type, "Curie");
        assert_eq!(curie.normalised_value.as_deref(), Some("≈393"));
        assert_eq!(curie.title, doc.info.title);
    }

    #[test]
    fn test_record_type_selection() {
        let doc = Document::from_json(SAMPLE).unwrap();
        let entries = doc.entries(&[RecordType::Curie]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].names, vec!["CrO2"]);
    }

    #[test]
    fn test_legacy_field_aliases() {
        let doc = Document::from_json(
            r#"{"document_info": {"doi": "10.1039/x"}, "chemical_records": [{"names": ["Gd"]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.info.doi.as_deref(), Some("10.1039/x"));
        assert_eq!(doc.records.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(Document::from_json("{not json"), Err(DocumentError::Parse(_))));
    }

    #[tokio::test]
    async fn test_from_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Document::from_file(&missing).await,
            Err(DocumentError::NotFound(_))
        ));

        let html = dir.path().join("article.html");
        std::fs::write(&html, "<html></html>").unwrap();
        assert!(matches!(
            Document::from_file(&html).await,
            Err(DocumentError::UnsupportedFormat(_))
        ));

        let json = dir.path().join("article.json");
        std::fs::write(&json, SAMPLE).unwrap();
        let doc = Document::from_file(&json).await.unwrap();
        assert_eq!(doc.records.len(), 2);
    }
}
