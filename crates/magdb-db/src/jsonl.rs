//! JSON Lines entry store.
//!
//! Each collection is a single append-only file `<dir>/<collection>.jsonl`
//! holding one serialised [`Entry`] per line.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{DbError, Result};
use crate::schema::Entry;
use crate::store::EntryStore;

/// File-backed store, one file per collection.
#[derive(Debug)]
pub struct JsonLinesStore {
    path: PathBuf,
    // Serialises appends from concurrent callers.
    write_lock: Mutex<()>,
}

impl JsonLinesStore {
    /// Open or create the collection `collection` under `dir`.
    pub async fn open(dir: impl AsRef<Path>, collection: &str) -> Result<Self> {
        validate_collection(collection)?;

        let dir = dir.as_ref();
        if !dir.exists() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let path = dir.join(format!("{collection}.jsonl"));
        tracing::debug!(path = %path.display(), "Opened JSON Lines store");

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EntryStore for JsonLinesStore {
    async fn insert_many(&self, entries: &[Entry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut buf = Vec::new();
        for entry in entries {
            serde_json::to_writer(&mut buf, entry)?;
            buf.push(b'\n');
        }

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&buf).await?;
        file.flush().await?;

        tracing::debug!(
            inserted = entries.len(),
            path = %self.path.display(),
            "Appended entries"
        );
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.all().await?.len())
    }

    async fn all(&self) -> Result<Vec<Entry>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(line).map_err(|e| DbError::Corrupt {
                line: idx + 1,
                message: e.to_string(),
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }
}

/// Collection names become file names, so keep them to a safe alphabet.
fn validate_collection(name: &str) -> Result<()> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(DbError::InvalidCollection(name.to_string()))
    }
}
