//! Quantity and unit extraction.

use super::patterns::{QUANTITY, UNIT_NOTE};
use super::capture_first;
use crate::application::Result;
use crate::error::ExtractionError;
use crate::lookup::UnitTable;

/// Ordered quantity following a "кол-во" / "количество" label.
pub fn extract_quantity(text: &str) -> Result<Option<u32>> {
    let Some(digits) = capture_first(&QUANTITY, text) else {
        return Ok(None);
    };

    digits.parse::<u32>().map(Some).map_err(|e| {
        ExtractionError::fault("quantity", format!("cannot read `{digits}` as a quantity: {e}"))
    })
}

/// Raw unit token written right after the quantity.
pub fn extract_unit_note(text: &str) -> Option<String> {
    capture_first(&UNIT_NOTE, text)
        .map(|unit| unit.trim().to_string())
        .filter(|unit| !unit.is_empty())
}

/// Canonical unit via the units dictionary.
pub struct UnitExtractor<'a> {
    table: &'a UnitTable,
}

impl<'a> UnitExtractor<'a> {
    pub fn new(table: &'a UnitTable) -> Self {
        Self { table }
    }

    /// Canonical unit for an already extracted raw note. A missing note and an
    /// unknown note both resolve to `None`.
    pub fn canonical(&self, note: Option<&str>) -> Option<String> {
        note.and_then(|note| self.table.canonical(note))
            .map(str::to_string)
    }
}
