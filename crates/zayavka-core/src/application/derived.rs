//! Fields derived from other extracted fields: truck-load capacity and the
//! number of register rows per application.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Result;
use crate::error::ExtractionError;
use crate::models::config::PipelineConfig;

/// How an application is split into truck-loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    /// Goods are measured in tons (ton unit or cement).
    pub tonnage: bool,
    /// Per-load capacity used for this application.
    pub capacity: u32,
    /// Quantity column value.
    pub display_quantity: Option<u32>,
    /// Unit column value.
    pub unit: Option<String>,
    /// Number of register rows.
    pub copies: usize,
}

/// Number of loads: `quantity / capacity` rounded half-to-even.
///
/// An absent quantity gives a single row without dividing. A count that
/// rounds to zero is raised to one so the application is still registered.
pub fn replication_count(quantity: Option<u32>, capacity: u32) -> Result<usize> {
    let Some(quantity) = quantity else {
        return Ok(1);
    };

    let loads = Decimal::from(quantity)
        .checked_div(Decimal::from(capacity))
        .ok_or(ExtractionError::DivisionUndefined { quantity, capacity })?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

    let copies = loads.to_usize().ok_or_else(|| {
        ExtractionError::AssemblyFault(format!("load count {loads} does not fit a row count"))
    })?;

    Ok(copies.max(1))
}

/// Derive quantity column, unit column and row count.
pub fn plan_loads(
    quantity: Option<u32>,
    unit: Option<&str>,
    product: Option<&str>,
    config: &PipelineConfig,
) -> Result<LoadPlan> {
    let marker = config.cement_marker.to_lowercase();
    let cement = !marker.is_empty()
        && product.is_some_and(|p| p.to_lowercase().contains(&marker));
    let tonnage = unit == Some(config.ton_unit.as_str()) || cement;

    let capacity = if tonnage {
        config.ton_capacity
    } else {
        config.default_capacity
    };

    let unit = if tonnage {
        Some(config.ton_unit.clone())
    } else {
        unit.map(str::to_string)
    };

    let display_quantity = if config.normalize_quantity {
        quantity.map(|_| capacity)
    } else {
        quantity
    };

    let copies = if config.replicate {
        replication_count(quantity, capacity)?
    } else {
        1
    };
    if copies > config.max_loads {
        return Err(ExtractionError::AssemblyFault(format!(
            "{copies} loads exceed the limit of {} rows per application",
            config.max_loads
        )));
    }

    Ok(LoadPlan {
        tonnage,
        capacity,
        display_quantity,
        unit,
        copies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tons_split_into_35() {
        let plan = plan_loads(Some(70), Some("т"), Some("щебень"), &PipelineConfig::default()).unwrap();

        assert_eq!(
            plan,
            LoadPlan {
                tonnage: true,
                capacity: 35,
                display_quantity: Some(35),
                unit: Some("т".to_string()),
                copies: 2,
            }
        );
    }

    #[test]
    fn test_other_units_split_into_40() {
        let plan = plan_loads(Some(90), Some("куб"), Some("песок"), &PipelineConfig::default()).unwrap();

        assert_eq!(plan.copies, 2);
        assert_eq!(plan.display_quantity, Some(40));
        assert_eq!(plan.unit, Some("куб".to_string()));
        assert!(!plan.tonnage);
    }

    #[test]
    fn test_cement_counts_as_tons() {
        let plan = plan_loads(Some(105), None, Some("ЦЕМ I 42,5Н"), &PipelineConfig::default()).unwrap();

        assert!(plan.tonnage);
        assert_eq!(plan.copies, 3);
        assert_eq!(plan.unit, Some("т".to_string()));
    }

    #[test]
    fn test_half_rounds_to_even() {
        assert_eq!(replication_count(Some(100), 40).unwrap(), 2);
        assert_eq!(replication_count(Some(140), 40).unwrap(), 4);
        assert_eq!(replication_count(Some(87), 35).unwrap(), 2);
    }

    #[test]
    fn test_absent_quantity_gives_single_row() {
        assert_eq!(replication_count(None, 40).unwrap(), 1);
        assert_eq!(replication_count(None, 0).unwrap(), 1);

        let plan = plan_loads(None, None, None, &PipelineConfig::default()).unwrap();
        assert_eq!(plan.copies, 1);
        assert_eq!(plan.display_quantity, None);
        assert_eq!(plan.unit, None);
    }

    #[test]
    fn test_small_quantity_still_registered() {
        assert_eq!(replication_count(Some(10), 35).unwrap(), 1);
    }

    #[test]
    fn test_zero_capacity_is_undefined() {
        assert_eq!(
            replication_count(Some(70), 0),
            Err(ExtractionError::DivisionUndefined { quantity: 70, capacity: 0 })
        );
    }

    #[test]
    fn test_load_count_is_bounded() {
        let config = PipelineConfig::default();
        assert_eq!(
            replication_count(Some(4_000_000_000), 35).unwrap(),
            114_285_714
        );

        let err = plan_loads(Some(4_000_000_000), Some("т"), None, &config).unwrap_err();
        assert!(matches!(err, ExtractionError::AssemblyFault(_)));

        let config = config.with_max_loads(2);
        assert_eq!(plan_loads(Some(70), Some("т"), None, &config).unwrap().copies, 2);
        assert!(plan_loads(Some(105), Some("т"), None, &config).is_err());
    }

    #[test]
    fn test_raw_quantity_kept_without_normalization() {
        let config = PipelineConfig::default()
            .with_quantity_normalization(false)
            .with_replication(false);
        let plan = plan_loads(Some(70), Some("т"), None, &config).unwrap();

        assert_eq!(plan.display_quantity, Some(70));
        assert_eq!(plan.copies, 1);
    }
}
