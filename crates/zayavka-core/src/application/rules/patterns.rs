//! Common regex patterns for order-application extraction.
//!
//! Applications separate their numbered sections with the literal two-character
//! token `\n` (backslash + `n`), not with real line breaks. Every line-bounded
//! pattern below stops at that token (`\\n` in the regex source).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // DD.MM with optional .YY or .YYYY
    pub static ref DATE: Regex = Regex::new(
        r"\d{2}\.(?:0[1-9]|1[0-2])(?:\.\d{2}(?:\d{2})?)?"
    ).unwrap();

    // Product grade: "Марка: ...", "Марка цемента: ..."
    pub static ref PRODUCT: Regex = Regex::new(
        r"(?i)Марка(?::)?\s*(?:цемента)?\s*(?::)?\s*(.*?)\\n"
    ).unwrap();

    // Free text between the grade line and the next numbered line
    pub static ref PRODUCT_NOTE: Regex = Regex::new(
        r"(?is)Марка.*?\\n(.*?)\\n\d"
    ).unwrap();

    pub static ref PRODUCT_NOTE_START: Regex = Regex::new(
        r"^[^0-9.]"
    ).unwrap();

    // "Кол-во: 70", "Количество 70", "кол - во"
    pub static ref QUANTITY: Regex = Regex::new(
        r"(?i)кол(?:\s*-\s*|ичест)?во\s*(?:\D*)(?::)?\s*(\d+)"
    ).unwrap();

    // Unit token after the quantity, before the next numbered line
    pub static ref UNIT_NOTE: Regex = Regex::new(
        r"(?i)кол(?:-|ичест)?во\s*(?:\D*)(?::)?\s*(?:\d+)\s*(\D+)\s*\\n\d"
    ).unwrap();

    // Vehicle plate with an optional trailing word (driver surname)
    pub static ref VEHICLE: Regex = Regex::new(
        r"(?i)[А-Я]\d{3}[А-Я]{2}\d{3}\s*\w*"
    ).unwrap();

    pub static ref SELLER: Regex = Regex::new(
        r"(?i)(?:продажа\s+от:|(?:продажа)?\s*от\s+(?:клиента)?\s*(?::)?)\s*(.+?)\\n"
    ).unwrap();

    pub static ref ORIGIN: Regex = Regex::new(
        r"(?i)\d+\.\s*(?:С\s+(?:перевалки)?\s*|Завод\s*(?:отгрузки)?\s*(?::)?|Перевалка\s*(?::)?)\s*(.+?)\\n"
    ).unwrap();

    pub static ref PURCHASER: Regex = Regex::new(
        r"(?i)\d+\.\s*Покупатель\s*(?:груза)?\s*(?::)?\s*(.+?)\\n"
    ).unwrap();

    pub static ref CONSIGNEE: Regex = Regex::new(
        r"(?i)\d+\.\s*(?:Грузопол\w*\s*(?::)?|Грузопол\w*\s*\(при\s*оформ\w*\s*ттн\)\s*(?::)?)\s*(.+?)\\n"
    ).unwrap();

    pub static ref CONSIGNEE_LEGAL_ADDRESS: Regex = Regex::new(
        r"(?i)\d+\.\s*(?:юр\w*\s*(?:\.)?\s*адрес\s*грузополучателя|адрес\s*грузополучателя\s*\(юр\w*\s*(?:\.)?\))\s*(?::)?\s*(.+?)\\n"
    ).unwrap();

    // Country/area/local groups with flexible separators
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d{1,3}[\s-]?\(?\d{3}\)?[\s-]?\d{2,3}[\s-]?\d{2}[\s-]?\d{2}"
    ).unwrap();

    pub static ref ACCEPTANCE_TIME: Regex = Regex::new(
        r"(?i)(?:время)?\s*при(?:ё|е)мк(?:и|а)(?::)?\s*(.*?)\s*\\n"
    ).unwrap();

    pub static ref NOTE: Regex = Regex::new(
        r"(?i)(оплата)\s*(?::)?\s*(.*?)\\n"
    ).unwrap();
}

/// The escaped line-break token used inside applications.
pub const LINE_BREAK: &str = "\\n";
