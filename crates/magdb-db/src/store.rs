//! Storage interface for normalised entries.

use async_trait::async_trait;
use crate::error::Result;
use crate::schema::Entry;

/// Common interface for all entry stores.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert a batch of entries. An empty batch is a no-op.
    async fn insert_many(&self, entries: &[Entry]) -> Result<()>;

    /// Number of entries currently stored.
    async fn count(&self) -> Result<usize>;

    /// All stored entries in insertion order.
    async fn all(&self) -> Result<Vec<Entry>>;
}
