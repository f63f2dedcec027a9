//! magdb Database Layer
//!
//! Stores normalised transition-temperature entries. Two backends are
//! provided behind the [`EntryStore`] trait:
//!
//! - [`MemoryStore`]: in-process, used by tests and dry runs
//! - [`JsonLinesStore`]: one append-only `.jsonl` file per collection
//!
//! # Example
//!
//! ```rust,no_run
//! use magdb_db::{EntryStore, JsonLinesStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonLinesStore::open("./data", "posts").await?;
//!     println!("{} entries stored", store.count().await?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod schema;
pub mod store;
pub mod memory;
pub mod jsonl;

pub use error::{DbError, Result};
pub use schema::{Entry, DEFAULT_COLLECTION};
pub use store::EntryStore;
pub use memory::MemoryStore;
pub use jsonl::JsonLinesStore;
