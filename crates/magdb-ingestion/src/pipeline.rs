//! Batch database build.
//!
//! Orchestrates a build over a directory of extracted-document files:
//!   1. List document files (sorted by name)
//!   2. Load each document, dropping unnamed compounds
//!   3. Build Néel / Curie entries, normalising every temperature to Kelvin
//!   4. Merge document metadata into each entry
//!   5. Insert the document's entries into the store as one batch
//!
//! A file that fails to load or save is logged and skipped; the run
//! continues with the next file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use magdb_common::RecordType;
use magdb_db::EntryStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::document::{is_document_file, Document};

// ── Job config ────────────────────────────────────────────────────────────────

/// Parameters for a single build run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildJob {
    pub input_dir: PathBuf,
    pub record_types: Vec<RecordType>,
}

impl BuildJob {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            record_types: RecordType::ALL.to_vec(),
        }
    }
}

// ── Result summary ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    pub job_id: Uuid,
    pub files_seen: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub entries_saved: usize,
    pub normalisation_failures: usize,
    pub errors: Vec<String>,
    pub duration_ms: u64,
}

// ── Pipeline orchestrator ─────────────────────────────────────────────────────

/// Runs the build for one job.
///
/// Only a missing or unreadable input directory aborts the run; per-file
/// failures are collected into [`BuildResult::errors`].
#[instrument(skip(store), fields(input_dir = %job.input_dir.display()))]
pub async fn run_build(job: &BuildJob, store: &dyn EntryStore) -> Result<BuildResult> {
    let job_id = Uuid::new_v4();
    let t0 = std::time::Instant::now();

    let files = list_document_files(&job.input_dir).await?;
    info!(job_id = %job_id, files = files.len(), "Starting database build");

    let mut result = BuildResult {
        job_id,
        files_seen: files.len(),
        files_processed: 0,
        files_failed: 0,
        entries_saved: 0,
        normalisation_failures: 0,
        errors: Vec::new(),
        duration_ms: 0,
    };

    for (idx, path) in files.iter().enumerate() {
        info!("Processing {}/{}: {}", idx + 1, files.len(), path.display());

        match process_file(path, &job.record_types, store).await {
            Ok((saved, failures)) => {
                result.files_processed += 1;
                result.entries_saved += saved;
                result.normalisation_failures += failures;
            }
            Err(e) => {
                warn!(path = %path.display(), "Skipping file: {e:#}");
                result.files_failed += 1;
                result.errors.push(format!("{}: {e:#}", path.display()));
            }
        }
    }

    result.duration_ms = t0.elapsed().as_millis() as u64;
    info!(
        job_id = %job_id,
        processed = result.files_processed,
        failed = result.files_failed,
        entries = result.entries_saved,
        normalisation_failures = result.normalisation_failures,
        duration_ms = result.duration_ms,
        "Database build complete"
    );
    Ok(result)
}

/// Load, build and save one document. Returns (entries saved, entries
/// whose temperature could not be normalised).
async fn process_file(
    path: &Path,
    record_types: &[RecordType],
    store: &dyn EntryStore,
) -> Result<(usize, usize)> {
    let doc = Document::from_file(path)
        .await
        .with_context(|| format!("loading {}", path.display()))?;

    debug!(
        compounds = doc.records.len(),
        measurements = doc.records.iter().map(|c| c.measurement_count()).sum::<usize>(),
        "Loaded document"
    );

    let entries = doc.entries(record_types);
    let failures = entries
        .iter()
        .filter(|e| e.extracted_units.is_some() && e.normalised_units.is_none())
        .count();

    if entries.is_empty() {
        debug!(path = %path.display(), "No transition temperatures found");
        return Ok((0, 0));
    }

    store
        .insert_many(&entries)
        .await
        .context("saving entries")?;
    Ok((entries.len(), failures))
}

/// Document files directly inside `dir`, sorted by file name.
pub async fn list_document_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("reading input directory {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let path = entry.path();
        if path.is_file() && is_document_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use magdb_db::MemoryStore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_document_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt", "c.JSON"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_document_files(dir.path()).await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.JSON"]);
    }

    #[tokio::test]
    async fn test_missing_input_dir_is_error() {
        let dir = tempdir().unwrap();
        let job = BuildJob::new(dir.path().join("does-not-exist"));
        let store = MemoryStore::new();
        assert!(run_build(&job, &store).await.is_err());
    }

    #[tokio::test]
    async fn test_unparseable_temperatures_are_counted() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("doc.json"),
            r#"{"records": [{"names": ["MnF2"], "neel_temperatures": [
                {"value": "67", "units": "K"},
                {"value": "about room temperature", "units": "°C"},
                {"value": "-206", "units": "°C"}
            ]}]}"#,
        )
        .unwrap();

        let store = MemoryStore::new();
        let result = run_build(&BuildJob::new(dir.path()), &store).await.unwrap();
        assert_eq!(result.entries_saved, 3);
        assert_eq!(result.normalisation_failures, 1);
        assert_eq!(store.count().await.unwrap(), 3);
    }
}
