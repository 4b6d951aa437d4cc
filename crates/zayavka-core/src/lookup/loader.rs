//! Loading dictionaries from CSV files.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{LookupTable, ManagerTable, TableRow, UnitTable, UnloadAddressTable};
use crate::error::LookupError;

/// File names inside the dictionary directory.
pub const MANAGERS_FILE: &str = "managers.csv";
pub const UNITS_FILE: &str = "units.csv";
pub const UNLOAD_ADDRESSES_FILE: &str = "unload_addresses.csv";

/// All dictionaries needed by the extraction pipeline.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub managers: ManagerTable,
    pub units: UnitTable,
    pub unload_addresses: UnloadAddressTable,
}

impl LookupTables {
    /// Load the three dictionaries from a directory.
    ///
    /// Missing files yield empty tables, except the units dictionary which
    /// falls back to the built-in synonyms.
    pub fn load_dir(dir: &Path) -> Result<Self, LookupError> {
        let managers = load_optional(&dir.join(MANAGERS_FILE))?.unwrap_or_default();
        let units = load_optional(&dir.join(UNITS_FILE))?.unwrap_or_else(UnitTable::builtin);
        let unload_addresses =
            load_optional(&dir.join(UNLOAD_ADDRESSES_FILE))?.unwrap_or_default();

        debug!(
            "Loaded dictionaries: {} managers, {} units, {} unload addresses",
            managers.len(),
            units.len(),
            unload_addresses.len()
        );

        Ok(Self {
            managers,
            units,
            unload_addresses,
        })
    }
}

fn load_optional<R>(path: &Path) -> Result<Option<LookupTable<R>>, LookupError>
where
    R: TableRow + DeserializeOwned,
{
    if !path.exists() {
        warn!("{} dictionary not found at {}", R::TABLE, path.display());
        return Ok(None);
    }
    load_table(path).map(Some)
}

/// Load one dictionary, keeping file order.
pub fn load_table<R>(path: &Path) -> Result<LookupTable<R>, LookupError>
where
    R: TableRow + DeserializeOwned,
{
    let read_err = |source| LookupError::Read {
        table: R::TABLE,
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;

    let headers = reader.headers().map_err(read_err)?.clone();
    for &column in R::COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LookupError::MissingColumn {
                table: R::TABLE,
                column,
            });
        }
    }

    let rows = reader
        .deserialize::<R>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;

    Ok(LookupTable::from_rows(rows))
}
