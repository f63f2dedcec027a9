//! magdb-common: Shared types and errors used across all magdb crates.

pub mod error;
pub mod measurement;

// Re-export commonly used types
pub use error::{MagdbError, Result};
pub use measurement::{DocumentInfo, Measurement, RecordType};
