//! Manager lookup by login.

use super::{squash, FieldExtractor};
use crate::application::Result;
use crate::error::ExtractionError;
use crate::lookup::ManagerTable;

/// Finds the responsible manager by a login mentioned in the text.
pub struct ManagerExtractor<'a> {
    table: &'a ManagerTable,
}

impl<'a> ManagerExtractor<'a> {
    pub fn new(table: &'a ManagerTable) -> Self {
        Self { table }
    }
}

impl FieldExtractor for ManagerExtractor<'_> {
    type Output = String;

    fn extract(&self, text: &str) -> Result<Option<String>> {
        let haystack = squash(text);

        for (index, row) in self.table.iter().enumerate() {
            let login = squash(&row.login);
            // An empty login would match every application.
            if login.is_empty() {
                return Err(ExtractionError::fault(
                    "manager",
                    format!("managers row {} has an empty login", index + 1),
                ));
            }
            if haystack.contains(&login) {
                return Ok(Some(row.manager.clone()));
            }
        }

        Ok(None)
    }
}
