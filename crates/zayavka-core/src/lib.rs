//! Core library for registering Russian-language order applications.
//!
//! This crate provides:
//! - Field extraction from free-form application text (manager, dates,
//!   product, quantity, parties, addresses, contacts, notes)
//! - Lookup tables for managers, units and unload addresses
//! - Derived fields: truck-load capacity and row replication
//! - The append-only register and its CSV storage

pub mod error;
pub mod models;
pub mod lookup;
pub mod application;
pub mod register;

pub use error::{ZayavkaError, Result};
pub use models::config::{PipelineConfig, StorageConfig, ZayavkaConfig};
pub use models::record::OrderRecord;
pub use lookup::LookupTables;
pub use application::{Assembly, ErrorLog, ErrorRecord, Field, RecordAssembler};
pub use register::{CsvRegisterStore, Register, RegisterStore};
