//! The register of processed applications and its storage.

mod csv_store;

pub use csv_store::CsvRegisterStore;

use crate::application::ErrorLog;
use crate::models::record::OrderRecord;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, crate::error::StoreError>;

/// Ordered collection of register rows; row numbers are always 1..=N.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Register {
    records: Vec<OrderRecord>,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a register from stored rows, renumbering them.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        let mut register = Self { records };
        register.renumber();
        register
    }

    /// Append rows at the end and renumber the whole register.
    pub fn append(&mut self, records: impl IntoIterator<Item = OrderRecord>) {
        self.records.extend(records);
        self.renumber();
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn renumber(&mut self) {
        for (index, record) in self.records.iter_mut().enumerate() {
            record.number = index + 1;
        }
    }
}

/// Persistent storage for the register.
///
/// Storage is whole-file: `load` returns every stored row and `persist`
/// replaces the stored register and error log with the given ones.
pub trait RegisterStore {
    /// Load the stored register; an absent register is empty.
    fn load(&self) -> Result<Register>;

    /// Replace stored content with `register` and `errors`.
    fn persist(&self, register: &Register, errors: &ErrorLog) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> OrderRecord {
        OrderRecord::minimal(text)
    }

    #[test]
    fn test_numbering_is_contiguous() {
        let mut register = Register::from_records(vec![record("a"), record("b"), record("c")]);
        let n = register.len();

        register.append(vec![record("d")]);
        register.append(vec![record("e"), record("e")]);

        let numbers: Vec<usize> = register.records().iter().map(|r| r.number).collect();
        assert_eq!(numbers, (1..=n + 3).collect::<Vec<_>>());
        assert_eq!(register.records()[3].text, "d");
        assert_eq!(register.records()[3].number, n + 1);
    }

    #[test]
    fn test_loaded_numbers_are_rewritten() {
        let stale = OrderRecord {
            number: 42,
            ..record("x")
        };
        let register = Register::from_records(vec![stale]);
        assert_eq!(register.records()[0].number, 1);
    }
}
