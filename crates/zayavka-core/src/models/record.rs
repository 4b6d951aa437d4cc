//! Register record model.
//!
//! Column names match the register spreadsheet the dispatchers work with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::display_text;

/// One register row. Absent fields are `None` and stored as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    /// 1-based position in the register.
    #[serde(rename = "№ Заявки")]
    pub number: usize,

    #[serde(rename = "Менеджер")]
    pub manager: Option<String>,

    #[serde(rename = "Дата", with = "register_date")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Вид доставки")]
    pub delivery_type: Option<String>,

    /// Product grade.
    #[serde(rename = "Товар")]
    pub product: Option<String>,

    #[serde(rename = "Примечание к Товару")]
    pub product_note: Option<String>,

    /// Quantity per row (the per-load capacity when normalized).
    #[serde(rename = "Кол-во")]
    pub quantity: Option<u32>,

    /// Quantity as ordered in the application.
    #[serde(rename = "Кол-во в заявке")]
    pub requested_quantity: Option<u32>,

    /// Canonical unit.
    #[serde(rename = "Ед.изм.")]
    pub unit: Option<String>,

    /// Unit as written in the application.
    #[serde(rename = "Ед.изм. в заявке")]
    pub unit_note: Option<String>,

    #[serde(rename = "Машина/Водитель")]
    pub vehicles: Option<String>,

    #[serde(rename = "Продавец")]
    pub seller: Option<String>,

    /// Transshipment point or plant.
    #[serde(rename = "Откуда")]
    pub origin: Option<String>,

    #[serde(rename = "Покупатель")]
    pub purchaser: Option<String>,

    #[serde(rename = "Грузополучатель")]
    pub consignee: Option<String>,

    #[serde(rename = "Юр. адрес грузополучателя")]
    pub consignee_legal_address: Option<String>,

    #[serde(rename = "Адрес пункта разгрузки")]
    pub unload_address: Option<String>,

    /// Consignee contact phones.
    #[serde(rename = "Контакт гп")]
    pub phones: Option<String>,

    #[serde(rename = "Время приемки")]
    pub acceptance_time: Option<String>,

    #[serde(rename = "Примечание Иное")]
    pub note: Option<String>,

    /// Application text with line-break tokens flattened to spaces.
    #[serde(rename = "Текст заявки")]
    pub text: String,
}

impl OrderRecord {
    /// Record holding only the application text.
    pub fn minimal(application: &str) -> Self {
        Self {
            text: display_text(application),
            ..Self::default()
        }
    }
}

/// Dates are stored as `DD.MM.YYYY`.
mod register_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::application::rules::dates::{format_date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&format_date(date)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let value: Option<String> = Option::deserialize(d)?;
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record() {
        let record = OrderRecord::minimal(r"1. Привет\n2. Мир");
        assert_eq!(record.text, "1. Привет 2. Мир");
        assert_eq!(record.manager, None);
        assert_eq!(record.quantity, None);
    }

    #[test]
    fn test_json_uses_register_columns() {
        let record = OrderRecord {
            number: 3,
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            quantity: Some(35),
            ..OrderRecord::minimal("текст")
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["№ Заявки"], 3);
        assert_eq!(json["Дата"], "05.03.2024");
        assert_eq!(json["Кол-во"], 35);
        assert!(json["Менеджер"].is_null());

        let back: OrderRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
