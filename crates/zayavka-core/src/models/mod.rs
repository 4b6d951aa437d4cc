//! Data models for zayavka.

pub mod config;
pub mod record;

pub use config::{PipelineConfig, StorageConfig, ZayavkaConfig};
pub use record::OrderRecord;
