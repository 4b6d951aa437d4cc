//! Configuration structures for the application pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::Field;

/// Main configuration for zayavka.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZayavkaConfig {
    /// Extraction pipeline configuration.
    pub pipeline: PipelineConfig,

    /// Dictionary and register file locations.
    pub storage: StorageConfig,
}

/// Extraction pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Extractors to run. Fields not listed are left absent.
    pub fields: Vec<Field>,

    /// Repeat the record once per truck-load.
    pub replicate: bool,

    /// Replace the ordered quantity with the per-load capacity in the
    /// quantity column. The ordered quantity is kept in its own column.
    pub normalize_quantity: bool,

    /// Per-load capacity for goods measured in tons (and cement).
    pub ton_capacity: u32,

    /// Per-load capacity for everything else.
    pub default_capacity: u32,

    /// Canonical symbol of the ton unit.
    pub ton_unit: String,

    /// Product fragment that marks cement, case-insensitive.
    pub cement_marker: String,

    /// Upper bound on rows per application; a larger load count is an
    /// assembly fault.
    pub max_loads: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            replicate: true,
            normalize_quantity: true,
            ton_capacity: 35,
            default_capacity: 40,
            ton_unit: "т".to_string(),
            cement_marker: "цем".to_string(),
            max_loads: 200,
        }
    }
}

impl PipelineConfig {
    /// Whether the extractor for `field` is enabled.
    pub fn is_enabled(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Restrict the pipeline to the given fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn with_replication(mut self, replicate: bool) -> Self {
        self.replicate = replicate;
        self
    }

    pub fn with_quantity_normalization(mut self, normalize: bool) -> Self {
        self.normalize_quantity = normalize;
        self
    }

    pub fn with_capacities(mut self, ton_capacity: u32, default_capacity: u32) -> Self {
        self.ton_capacity = ton_capacity;
        self.default_capacity = default_capacity;
        self
    }

    pub fn with_max_loads(mut self, max_loads: usize) -> Self {
        self.max_loads = max_loads;
        self
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory with managers.csv, units.csv and unload_addresses.csv.
    pub dictionary_dir: PathBuf,

    /// Register CSV file.
    pub register_path: PathBuf,

    /// Error log CSV file, rewritten on every run.
    pub errors_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dictionary_dir: PathBuf::from("dictionary"),
            register_path: PathBuf::from("appl_register.csv"),
            errors_path: PathBuf::from("appl_register_errors.csv"),
        }
    }
}

impl ZayavkaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_every_field() {
        let config = PipelineConfig::default();
        assert!(Field::ALL.iter().all(|f| config.is_enabled(*f)));
        assert_eq!(config.ton_capacity, 35);
        assert_eq!(config.default_capacity, 40);
        assert_eq!(config.max_loads, 200);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ZayavkaConfig =
            serde_json::from_str(r#"{"pipeline": {"fields": ["manager", "unload_address"], "replicate": false}}"#)
                .unwrap();

        assert_eq!(config.pipeline.fields, vec![Field::Manager, Field::UnloadAddress]);
        assert!(!config.pipeline.replicate);
        assert!(config.pipeline.normalize_quantity);
        assert_eq!(config.storage.register_path, PathBuf::from("appl_register.csv"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ZayavkaConfig::default();
        config.pipeline.ton_capacity = 30;
        config.save(&path).unwrap();

        let loaded = ZayavkaConfig::from_file(&path).unwrap();
        assert_eq!(loaded.pipeline.ton_capacity, 30);
    }
}
