//! Configuration loading for magdb.
//! Reads magdb.toml from the current directory or the path in MAGDB_CONFIG.

use magdb_common::{MagdbError, RecordType, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "magdb.toml";
pub const CONFIG_ENV_VAR: &str = "MAGDB_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub ingestion: IngestionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_db_path(), collection: default_collection() }
    }
}

fn default_db_path()    -> String { "./data".to_string() }
fn default_collection() -> String { magdb_db::DEFAULT_COLLECTION.to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_record_types")]
    pub record_types: Vec<RecordType>,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self { input_dir: default_input_dir(), record_types: default_record_types() }
    }
}

fn default_input_dir()    -> String          { "./corpus".to_string() }
fn default_record_types() -> Vec<RecordType> { RecordType::ALL.to_vec() }

mod tests;

impl Config {
    /// Load configuration.
    ///
    /// Resolution order: `explicit` path, then MAGDB_CONFIG, then
    /// magdb.toml in the current directory. A missing magdb.toml falls back
    /// to defaults; a missing file that was named explicitly is an error.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let named = explicit
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

        let path = named.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            if named.is_some() {
                return Err(MagdbError::Config(format!("Config file not found: {path}")));
            }
            tracing::warn!(
                "No {} found, using defaults. Copy magdb.example.toml to magdb.toml to customise.",
                DEFAULT_CONFIG_PATH
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path, "Configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.ingestion.record_types.is_empty() {
            return Err(MagdbError::Config(
                "ingestion.record_types must name at least one record type".to_string(),
            ));
        }
        Ok(config)
    }
}
