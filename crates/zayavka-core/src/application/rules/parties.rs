//! Seller, origin point, purchaser and consignee sections.

use super::capture_first;
use super::patterns::{CONSIGNEE, CONSIGNEE_LEGAL_ADDRESS, ORIGIN, PURCHASER, SELLER};

fn line_value(re: &regex::Regex, text: &str) -> Option<String> {
    capture_first(re, text)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Our selling organization ("продажа от:", "от клиента").
pub fn extract_seller(text: &str) -> Option<String> {
    line_value(&SELLER, text)
}

/// Transshipment point or plant the goods are loaded at.
pub fn extract_origin(text: &str) -> Option<String> {
    line_value(&ORIGIN, text)
}

pub fn extract_purchaser(text: &str) -> Option<String> {
    line_value(&PURCHASER, text)
}

/// Consignee name; colon remnants of the label are stripped.
pub fn extract_consignee(text: &str) -> Option<String> {
    let value = capture_first(&CONSIGNEE, text)?;
    let name = value.rsplit(':').next().unwrap_or(&value).trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

pub fn extract_consignee_legal_address(text: &str) -> Option<String> {
    line_value(&CONSIGNEE_LEGAL_ADDRESS, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const APPLICATION: &str = concat!(
        r"Продажа от: ООО Арди-а\n",
        r"1. С перевалки Подольск\n",
        r"2. Покупатель груза: ООО СтройКом\n",
        r"3. Грузополучатель (при оформлении ТТН): АО Бетон\n",
        r"4. Юр. адрес грузополучателя: г. Москва, ул. Ленина 1\n",
        r"5. Конец",
    );

    #[test]
    fn test_seller() {
        assert_eq!(extract_seller(APPLICATION), Some("ООО Арди-а".to_string()));
        assert_eq!(
            extract_seller(r"Заявка от клиента: ИП Петров\n"),
            Some("ИП Петров".to_string())
        );
    }

    #[test]
    fn test_origin_variants() {
        assert_eq!(extract_origin(APPLICATION), Some("Подольск".to_string()));
        assert_eq!(
            extract_origin(r"1. Завод отгрузки: Мальцовский\n"),
            Some("Мальцовский".to_string())
        );
        assert_eq!(
            extract_origin(r"1. Перевалка: Рязань\n"),
            Some("Рязань".to_string())
        );
    }

    #[test]
    fn test_purchaser() {
        assert_eq!(extract_purchaser(APPLICATION), Some("ООО СтройКом".to_string()));
        assert_eq!(extract_purchaser("Покупатель: без номера"), None);
    }

    #[test]
    fn test_consignee_strips_label_remnants() {
        assert_eq!(extract_consignee(APPLICATION), Some("АО Бетон".to_string()));
        assert_eq!(
            extract_consignee(r"3. Грузополучатель: ООО Дом\n"),
            Some("ООО Дом".to_string())
        );
    }

    #[test]
    fn test_consignee_legal_address() {
        assert_eq!(
            extract_consignee_legal_address(APPLICATION),
            Some("г. Москва, ул. Ленина 1".to_string())
        );
        assert_eq!(
            extract_consignee_legal_address(r"4. Адрес грузополучателя (юр.): Тула\n"),
            Some("Тула".to_string())
        );
    }
}
