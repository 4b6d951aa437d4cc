//! Product grade and product note extraction.

use super::capture_first;
use super::patterns::{PRODUCT, PRODUCT_NOTE, PRODUCT_NOTE_START};

/// Product grade following the "Марка" label.
pub fn extract_product(text: &str) -> Option<String> {
    capture_first(&PRODUCT, text)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Free-text note on the line(s) after the grade label.
///
/// A candidate starting with a digit or a period is the next numbered
/// section, not a note.
pub fn extract_product_note(text: &str) -> Option<String> {
    let note = capture_first(&PRODUCT_NOTE, text)?;

    if !PRODUCT_NOTE_START.is_match(&note) {
        return None;
    }

    Some(note.trim().to_string()).filter(|note| !note.is_empty())
}
