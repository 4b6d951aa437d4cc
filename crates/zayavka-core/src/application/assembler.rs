//! Record assembler: runs every extractor over one application and builds
//! the register rows for it.

use std::error::Error as StdError;

use tracing::{debug, info, warn};

use super::derived::plan_loads;
use super::error_log::{ErrorLog, ErrorRecord};
use super::rules::{
    delivery_type, extract_acceptance_time, extract_consignee, extract_consignee_legal_address,
    extract_note, extract_origin, extract_phones, extract_product, extract_product_note,
    extract_purchaser, extract_quantity, extract_seller, extract_unit_note, extract_vehicles,
    find_dates, join_list, normalize_date, FieldExtractor, ManagerExtractor, UnitExtractor,
    UnloadAddressExtractor,
};
use super::{Field, Result};
use crate::lookup::LookupTables;
use crate::models::config::PipelineConfig;
use crate::models::record::OrderRecord;

/// Output of one assembler run.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Register rows for the application, numbered after the register tail.
    pub records: Vec<OrderRecord>,
    /// Failures captured while extracting.
    pub errors: ErrorLog,
}

/// Orchestrates extractors and derived rules for a single application.
pub struct RecordAssembler<'a> {
    tables: &'a LookupTables,
    config: &'a PipelineConfig,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(tables: &'a LookupTables, config: &'a PipelineConfig) -> Self {
        Self { tables, config }
    }

    /// Build the rows for `text`, numbering them after `register_len`
    /// existing rows.
    ///
    /// Never fails: extractor faults leave their field absent and are logged;
    /// a fault while combining fields yields a single row with only the text.
    pub fn assemble(&self, text: &str, register_len: usize) -> Assembly {
        info!("Processing application of {} characters", text.chars().count());

        let mut errors = ErrorLog::new();
        let record = self.extract_record(text, &mut errors);

        let mut records = match self.replicate(record) {
            Ok(records) => records,
            Err(err) => {
                warn!("Record assembly failed: {}", err);
                errors.push(ErrorRecord::new(diagnostic(&err), text));
                vec![OrderRecord::minimal(text)]
            }
        };

        for (offset, record) in records.iter_mut().enumerate() {
            record.number = register_len + offset + 1;
        }

        debug!(
            "Assembled {} rows with {} errors",
            records.len(),
            errors.len()
        );

        Assembly { records, errors }
    }

    /// Run one extractor, logging a fault instead of propagating it.
    fn capture<T>(
        &self,
        field: Field,
        text: &str,
        errors: &mut ErrorLog,
        extract: impl FnOnce() -> Result<Option<T>>,
    ) -> Option<T> {
        if !self.config.is_enabled(field) {
            return None;
        }

        match extract() {
            Ok(value) => value,
            Err(err) => {
                warn!("Extractor {} failed: {}", field, err);
                errors.push(ErrorRecord::new(format!("error in {field}: {err}"), text));
                None
            }
        }
    }

    fn extract_record(&self, text: &str, errors: &mut ErrorLog) -> OrderRecord {
        let manager = self.capture(Field::Manager, text, errors, || {
            ManagerExtractor::new(&self.tables.managers).extract(text)
        });
        let date = self.capture(Field::Date, text, errors, || {
            find_dates(text).first().map(|d| normalize_date(d)).transpose()
        });
        let delivery = self.capture(Field::DeliveryType, text, errors, || {
            Ok(Some(delivery_type(text).to_string()))
        });
        let product = self.capture(Field::Product, text, errors, || Ok(extract_product(text)));
        let product_note = self.capture(Field::ProductNote, text, errors, || {
            Ok(extract_product_note(text))
        });
        let quantity = self.capture(Field::Quantity, text, errors, || extract_quantity(text));
        let unit_note = self.capture(Field::Unit, text, errors, || Ok(extract_unit_note(text)));
        let unit = UnitExtractor::new(&self.tables.units).canonical(unit_note.as_deref());
        let vehicles = self.capture(Field::Vehicles, text, errors, || {
            Ok(join_list(extract_vehicles(text)))
        });
        let seller = self.capture(Field::Seller, text, errors, || Ok(extract_seller(text)));
        let origin = self.capture(Field::Origin, text, errors, || Ok(extract_origin(text)));
        let purchaser = self.capture(Field::Purchaser, text, errors, || Ok(extract_purchaser(text)));
        let consignee = self.capture(Field::Consignee, text, errors, || Ok(extract_consignee(text)));
        let consignee_legal_address = self.capture(Field::ConsigneeLegalAddress, text, errors, || {
            Ok(extract_consignee_legal_address(text))
        });
        let unload_address = self.capture(Field::UnloadAddress, text, errors, || {
            UnloadAddressExtractor::new(&self.tables.unload_addresses).extract(text)
        });
        let phones = self.capture(Field::Phones, text, errors, || {
            Ok(join_list(extract_phones(text)))
        });
        let acceptance_time = self.capture(Field::AcceptanceTime, text, errors, || {
            Ok(extract_acceptance_time(text))
        });
        let note = self.capture(Field::Note, text, errors, || Ok(extract_note(text)));

        OrderRecord {
            number: 0,
            manager,
            date,
            delivery_type: delivery,
            product,
            product_note,
            quantity: None,
            requested_quantity: quantity,
            unit,
            unit_note,
            vehicles,
            seller,
            origin,
            purchaser,
            consignee,
            consignee_legal_address,
            unload_address,
            phones,
            acceptance_time,
            note,
            ..OrderRecord::minimal(text)
        }
    }

    /// Apply the load plan: quantity and unit columns, then one row per load.
    fn replicate(&self, mut record: OrderRecord) -> Result<Vec<OrderRecord>> {
        let plan = plan_loads(
            record.requested_quantity,
            record.unit.as_deref(),
            record.product.as_deref(),
            self.config,
        )?;

        record.quantity = plan.display_quantity;
        record.unit = plan.unit;

        Ok(vec![record; plan.copies])
    }
}

/// Full diagnostic for an assembly fault: message, debug form and causes.
fn diagnostic(err: &(dyn StdError + 'static)) -> String {
    let mut out = format!("record assembly failed: {err}\n{err:?}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\ncaused by: {cause}"));
        source = cause.source();
    }
    out
}
