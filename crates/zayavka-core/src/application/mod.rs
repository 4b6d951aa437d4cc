//! Order-application field extraction module.

mod assembler;
mod derived;
mod error_log;
pub mod rules;

pub use assembler::{Assembly, RecordAssembler};
pub use derived::{plan_loads, replication_count, LoadPlan};
pub use error_log::{ErrorLog, ErrorRecord};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use rules::patterns::LINE_BREAK;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Output fields filled by the extraction pipeline, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Manager,
    Date,
    DeliveryType,
    Product,
    ProductNote,
    Quantity,
    /// Raw unit note and its canonical unit.
    Unit,
    Vehicles,
    Seller,
    Origin,
    Purchaser,
    Consignee,
    ConsigneeLegalAddress,
    UnloadAddress,
    Phones,
    AcceptanceTime,
    Note,
}

impl Field {
    pub const ALL: [Field; 17] = [
        Field::Manager,
        Field::Date,
        Field::DeliveryType,
        Field::Product,
        Field::ProductNote,
        Field::Quantity,
        Field::Unit,
        Field::Vehicles,
        Field::Seller,
        Field::Origin,
        Field::Purchaser,
        Field::Consignee,
        Field::ConsigneeLegalAddress,
        Field::UnloadAddress,
        Field::Phones,
        Field::AcceptanceTime,
        Field::Note,
    ];

    /// Extractor name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Date => "date",
            Self::DeliveryType => "delivery_type",
            Self::Product => "product",
            Self::ProductNote => "product_note",
            Self::Quantity => "quantity",
            Self::Unit => "unit",
            Self::Vehicles => "vehicles",
            Self::Seller => "seller",
            Self::Origin => "origin",
            Self::Purchaser => "purchaser",
            Self::Consignee => "consignee",
            Self::ConsigneeLegalAddress => "consignee_legal_address",
            Self::UnloadAddress => "unload_address",
            Self::Phones => "phones",
            Self::AcceptanceTime => "acceptance_time",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turn real line breaks into the `\n` token applications are written with.
///
/// Text typed or pasted from a file carries real line breaks; the extractors
/// only understand the escaped form.
pub fn escape_line_breaks(text: &str) -> String {
    text.replace("\r\n", LINE_BREAK).replace('\n', LINE_BREAK)
}

/// Application text as stored in the register: `\n` tokens become spaces.
pub fn display_text(text: &str) -> String {
    text.replace(LINE_BREAK, " ")
}
