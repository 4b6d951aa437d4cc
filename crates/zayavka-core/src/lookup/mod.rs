//! Static dictionaries used by the extractors.
//!
//! Every table is an ordered list of rows. Lookups scan rows in order and the
//! first matching row wins, so earlier rows shadow later ones.

mod loader;

pub use loader::{load_table, LookupTables};

use serde::{Deserialize, Serialize};

/// A row type that can be loaded from a dictionary file.
pub trait TableRow {
    /// Table name used in logs and errors.
    const TABLE: &'static str;

    /// Column names the dictionary file must provide.
    const COLUMNS: &'static [&'static str];
}

/// Manager login → manager full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRow {
    pub login: String,
    pub manager: String,
}

impl TableRow for ManagerRow {
    const TABLE: &'static str = "managers";
    const COLUMNS: &'static [&'static str] = &["login", "manager"];
}

/// Raw unit token → canonical unit symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRow {
    pub data: String,
    pub unit: String,
}

impl TableRow for UnitRow {
    const TABLE: &'static str = "units";
    const COLUMNS: &'static [&'static str] = &["data", "unit"];
}

/// Consignee name fragment + place fragment → canonical unload address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnloadAddressRow {
    pub name: String,
    pub place: String,
    pub address: String,
}

impl TableRow for UnloadAddressRow {
    const TABLE: &'static str = "unload_addresses";
    const COLUMNS: &'static [&'static str] = &["name", "place", "address"];
}

/// Ordered, read-only dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable<R> {
    rows: Vec<R>,
}

impl<R> LookupTable<R> {
    /// Create a table from rows in definition order.
    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for LookupTable<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

pub type ManagerTable = LookupTable<ManagerRow>;
pub type UnitTable = LookupTable<UnitRow>;
pub type UnloadAddressTable = LookupTable<UnloadAddressRow>;

impl ManagerTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::from_rows(
            pairs
                .into_iter()
                .map(|(login, manager)| ManagerRow {
                    login: login.to_string(),
                    manager: manager.to_string(),
                })
                .collect(),
        )
    }
}

impl UnitTable {
    /// Unit synonyms used when no units dictionary is supplied.
    pub fn builtin() -> Self {
        Self::from_pairs([
            ("т", "т"),
            ("т.", "т"),
            ("тн", "т"),
            ("тонн", "т"),
            ("кубов", "куб"),
        ])
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::from_rows(
            pairs
                .into_iter()
                .map(|(data, unit)| UnitRow {
                    data: data.to_string(),
                    unit: unit.to_string(),
                })
                .collect(),
        )
    }

    /// Canonical unit for a raw unit note (exact match on the raw token).
    pub fn canonical(&self, raw: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.data == raw)
            .map(|row| row.unit.as_str())
    }
}

impl UnloadAddressTable {
    pub fn from_triples<'a>(
        triples: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> Self {
        Self::from_rows(
            triples
                .into_iter()
                .map(|(name, place, address)| UnloadAddressRow {
                    name: name.to_string(),
                    place: place.to_string(),
                    address: address.to_string(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_units() {
        let units = UnitTable::builtin();
        for raw in ["т", "т.", "тн", "тонн"] {
            assert_eq!(units.canonical(raw), Some("т"));
        }
        assert_eq!(units.canonical("кубов"), Some("куб"));
        assert_eq!(units.canonical("мешков"), None);
    }

    #[test]
    fn test_first_row_wins() {
        let units = UnitTable::from_pairs([("т", "т"), ("т", "кг")]);
        assert_eq!(units.canonical("т"), Some("т"));
        assert_eq!(units.len(), 2);
    }
}
