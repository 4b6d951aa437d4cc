//! Append-only log of extraction failures.

use serde::{Deserialize, Serialize};

/// One failure, together with the application that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Error message, prefixed with the failing extractor.
    #[serde(rename = "Ошибка")]
    pub message: String,

    /// Original application text.
    #[serde(rename = "Заявка")]
    pub application: String,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            application: application.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    entries: Vec<ErrorRecord>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ErrorRecord) {
        self.entries.push(record);
    }

    pub fn entries(&self) -> &[ErrorRecord] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ErrorRecord>> for ErrorLog {
    fn from(entries: Vec<ErrorRecord>) -> Self {
        Self { entries }
    }
}
