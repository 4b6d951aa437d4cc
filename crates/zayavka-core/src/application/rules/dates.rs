//! Date extraction and normalization.

use chrono::{Datelike, Local, NaiveDate};

use super::patterns::DATE;
use crate::error::ExtractionError;

/// Output format of normalized dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// All `DD.MM[.YY[YY]]` candidates, in text order.
pub fn find_dates(text: &str) -> Vec<&str> {
    DATE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Normalize a date candidate using the current year for `DD.MM`.
pub fn normalize_date(date: &str) -> Result<NaiveDate, ExtractionError> {
    normalize_date_in_year(date, Local::now().year())
}

/// Normalize a date candidate, completing `DD.MM` with `year`.
///
/// Four-digit years are tried first, then two-digit years
/// (00-68 → 20xx, 69-99 → 19xx).
pub fn normalize_date_in_year(date: &str, year: i32) -> Result<NaiveDate, ExtractionError> {
    let invalid = || ExtractionError::InvalidDateFormat(date.to_string());
    let parts: Vec<&str> = date.trim().split('.').collect();

    let (day_month, year_part) = match parts.as_slice() {
        [day, month] => (format!("{day}.{month}"), year.to_string()),
        [day, month, year] => (format!("{day}.{month}"), (*year).to_string()),
        _ => return Err(invalid()),
    };

    let year_part = match year_part.len() {
        4 => year_part,
        2 => {
            let yy: i32 = year_part.parse().map_err(|_| invalid())?;
            let century = if yy < 69 { 2000 } else { 1900 };
            (century + yy).to_string()
        }
        _ => return Err(invalid()),
    };

    NaiveDate::parse_from_str(&format!("{day_month}.{year_part}"), DATE_FORMAT)
        .map_err(|_| invalid())
}

/// Render a date as `DD.MM.YYYY`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
