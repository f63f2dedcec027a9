//! magdb-ingestion: Transition-temperature ingestion pipeline.
//! - Temperature normalisation to Kelvin
//! - Néel / Curie record building
//! - Document-info merge
//! - Batch database build over a directory of extracted documents

pub mod document;
pub mod models;
pub mod normalise;
pub mod pipeline;
pub mod records;
