//! Rule-based field extractors for order applications.
//!
//! Plain extractors are free functions over the application text. Extractors
//! that consult a dictionary are small structs; the ones that can hit a
//! malformed dictionary row implement [`FieldExtractor`].

pub mod address;
pub mod contacts;
pub mod dates;
pub mod delivery;
pub mod manager;
pub mod notes;
pub mod parties;
pub mod patterns;
pub mod product;
pub mod quantity;

pub use address::UnloadAddressExtractor;
pub use contacts::{extract_phones, extract_vehicles, join_list};
pub use dates::{find_dates, format_date, normalize_date, normalize_date_in_year};
pub use delivery::{delivery_type, DeliveryType};
pub use manager::ManagerExtractor;
pub use notes::{extract_acceptance_time, extract_note};
pub use parties::{
    extract_consignee, extract_consignee_legal_address, extract_origin, extract_purchaser,
    extract_seller,
};
pub use product::{extract_product, extract_product_note};
pub use quantity::{extract_quantity, extract_unit_note, UnitExtractor};

use super::Result;

/// Trait for field extractors backed by a lookup table.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    ///
    /// `Ok(None)` means the field is not present; `Err` means the extractor
    /// could not do its job (for example a malformed dictionary row).
    fn extract(&self, text: &str) -> Result<Option<Self::Output>>;
}

/// Lowercase and drop spaces, for dictionary fragment matching.
pub(crate) fn squash(text: &str) -> String {
    text.to_lowercase().replace(' ', "")
}

/// First capture group of `re` in `text`, as an owned string.
pub(crate) fn capture_first(re: &regex::Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
