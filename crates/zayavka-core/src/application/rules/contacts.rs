//! Vehicle plates and phone numbers.

use super::patterns::{PHONE, VEHICLE};

/// All vehicle plates (with an optional driver word after each plate).
pub fn extract_vehicles(text: &str) -> Vec<String> {
    VEHICLE
        .find_iter(text)
        .map(|m| m.as_str().trim_end().to_string())
        .collect()
}

/// All phone numbers, as written.
pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collapse a list field into its stored form; an empty list is absent.
pub fn join_list(values: Vec<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vehicles_with_driver() {
        let text = r"5. Машина: А123ВС777 Иванов, к456мн750\n6.";
        assert_eq!(
            extract_vehicles(text),
            vec!["А123ВС777 Иванов".to_string(), "к456мн750".to_string()]
        );
    }

    #[test]
    fn test_phones() {
        let text = r"7. Контакт: +7 (916) 123-45-67, 8-903-555-12-34\n";
        assert_eq!(
            extract_phones(text),
            vec!["+7 (916) 123-45-67".to_string(), "8-903-555-12-34".to_string()]
        );
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(Vec::new()), None);
        assert_eq!(
            join_list(vec!["a".to_string(), "b".to_string()]),
            Some("a, b".to_string())
        );
    }
}
