//! Unload address lookup.

use super::{squash, FieldExtractor};
use crate::application::Result;
use crate::error::ExtractionError;
use crate::lookup::UnloadAddressTable;

/// Resolves the canonical unload address from the unload-address dictionary.
///
/// A row matches when both its name fragment and its place fragment occur in
/// the text, compared case- and space-insensitively.
pub struct UnloadAddressExtractor<'a> {
    table: &'a UnloadAddressTable,
}

impl<'a> UnloadAddressExtractor<'a> {
    pub fn new(table: &'a UnloadAddressTable) -> Self {
        Self { table }
    }
}

impl FieldExtractor for UnloadAddressExtractor<'_> {
    type Output = String;

    fn extract(&self, text: &str) -> Result<Option<String>> {
        let haystack = squash(text);

        for (index, row) in self.table.iter().enumerate() {
            let name = squash(&row.name);
            let place = squash(&row.place);
            if name.is_empty() || place.is_empty() {
                return Err(ExtractionError::fault(
                    "unload_address",
                    format!("unload_addresses row {} has an empty name or place", index + 1),
                ));
            }
            if haystack.contains(&name) && haystack.contains(&place) {
                return Ok(Some(row.address.clone()));
            }
        }

        Ok(None)
    }
}
