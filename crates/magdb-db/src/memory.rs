//! In-process entry store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::schema::Entry;
use crate::store::EntryStore;

/// Keeps entries in memory. Used by tests and `--dry-run` style callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn insert_many(&self, entries: &[Entry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        self.entries.write().await.extend_from_slice(entries);
        tracing::debug!(inserted = entries.len(), "Inserted entries into memory store");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }

    async fn all(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magdb_common::{Measurement, RecordType};

    fn entry(value: &str) -> Entry {
        Entry::new(RecordType::Neel, vec!["MnO".to_string()], &Measurement::new(value, Some("K")))
    }

    #[tokio::test]
    async fn test_insert_and_count() {
        let store = MemoryStore::new();
        store.insert_many(&[entry("118"), entry("120")]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
        let all = store.all().await.unwrap();
        assert_eq!(all[0].extracted_value, "118");
        assert_eq!(all[1].extracted_value, "120");
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let store = MemoryStore::new();
        store.insert_many(&[]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
