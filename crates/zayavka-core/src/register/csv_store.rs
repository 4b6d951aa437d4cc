//! CSV-backed register storage.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Register, RegisterStore, Result};
use crate::application::ErrorLog;
use crate::error::StoreError;
use crate::models::config::StorageConfig;
use crate::models::record::OrderRecord;

/// Column headers of the error file.
const ERROR_HEADERS: [&str; 2] = ["Ошибка", "Заявка"];

/// Register stored as a CSV file, with the error log in a sibling CSV file.
#[derive(Debug, Clone)]
pub struct CsvRegisterStore {
    register_path: PathBuf,
    errors_path: PathBuf,
}

impl CsvRegisterStore {
    pub fn new(register_path: impl Into<PathBuf>, errors_path: impl Into<PathBuf>) -> Self {
        Self {
            register_path: register_path.into(),
            errors_path: errors_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.register_path, &config.errors_path)
    }

    pub fn register_path(&self) -> &Path {
        &self.register_path
    }

    pub fn errors_path(&self) -> &Path {
        &self.errors_path
    }
}

fn csv_err(path: &Path) -> impl Fn(csv::Error) -> StoreError + '_ {
    move |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    }
}

fn io_err(path: &Path) -> impl Fn(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Write through a temporary sibling file so a failed run never leaves a
/// half-written register behind.
fn replace_file(
    path: &Path,
    write: impl FnOnce(&mut csv::Writer<fs::File>) -> std::result::Result<(), csv::Error>,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut writer = csv::Writer::from_path(&tmp).map_err(csv_err(&tmp))?;
    write(&mut writer).map_err(csv_err(&tmp))?;
    writer.flush().map_err(io_err(&tmp))?;
    drop(writer);

    fs::rename(&tmp, path).map_err(io_err(path))
}

impl RegisterStore for CsvRegisterStore {
    fn load(&self) -> Result<Register> {
        let path = &self.register_path;
        if !path.exists() {
            info!("No register at {}, starting a new one", path.display());
            return Ok(Register::new());
        }

        let mut reader = csv::Reader::from_path(path).map_err(csv_err(path))?;
        let records = reader
            .deserialize::<OrderRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(csv_err(path))?;

        debug!("Loaded {} register rows from {}", records.len(), path.display());
        Ok(Register::from_records(records))
    }

    fn persist(&self, register: &Register, errors: &ErrorLog) -> Result<()> {
        replace_file(&self.register_path, |writer| {
            for record in register.records() {
                writer.serialize(record)?;
            }
            Ok(())
        })?;

        replace_file(&self.errors_path, |writer| {
            writer.write_record(ERROR_HEADERS)?;
            for entry in errors.iter() {
                writer.write_record([entry.message.as_str(), entry.application.as_str()])?;
            }
            Ok(())
        })?;

        info!(
            "Saved {} register rows and {} errors",
            register.len(),
            errors.len()
        );
        Ok(())
    }
}
