//! Acceptance time and payment note.

use super::capture_first;
use super::patterns::{ACCEPTANCE_TIME, NOTE};

/// Acceptance (reception) time at the unload point.
pub fn extract_acceptance_time(text: &str) -> Option<String> {
    capture_first(&ACCEPTANCE_TIME, text)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Payment note: the "оплата" label followed by the rest of its line.
pub fn extract_note(text: &str) -> Option<String> {
    if !text.to_lowercase().contains("оплата") {
        return None;
    }

    let caps = NOTE.captures(text)?;
    let label = caps.get(1).map_or("", |m| m.as_str().trim());
    let rest = caps.get(2).map_or("", |m| m.as_str().trim());

    Some(format!("{label} {rest}").trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_time() {
        assert_eq!(
            extract_acceptance_time(r"8. Время приёмки: с 8:00 до 17:00 \n9."),
            Some("с 8:00 до 17:00".to_string())
        );
        assert_eq!(
            extract_acceptance_time(r"8. Приемка круглосуточно\n"),
            Some("круглосуточно".to_string())
        );
        assert_eq!(extract_acceptance_time("8. Время: утро"), None);
    }

    #[test]
    fn test_note_keeps_label() {
        assert_eq!(
            extract_note(r"9. Оплата: по факту отгрузки\n10."),
            Some("Оплата по факту отгрузки".to_string())
        );
    }

    #[test]
    fn test_note_absent() {
        assert_eq!(extract_note(r"9. Примечание: нет\n"), None);
        // Label present but the line never ends.
        assert_eq!(extract_note("9. Оплата: предоплата"), None);
    }
}
