//! One-shot file loaders: read a source file, hand the raw table to the
//! schema normalizer, and degrade to the purpose's empty table when the
//! file is missing or unreadable. Every dashboard refresh re-reads from
//! disk; nothing is cached.

use crate::data::csv_reader::read_raw_table;
use crate::data::raw_table::RawTable;
use crate::schema;
use shared::models::{JanuarySales, MonthlySeries, PriceSeries, StatePurchases};
use std::path::Path;
use tracing::warn;

fn read_source(path: &Path) -> Option<RawTable> {
    if !path.exists() {
        warn!(path = %path.display(), "source file missing, returning empty table");
        return None;
    }
    match read_raw_table(path) {
        Ok(raw) => Some(raw),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read source file, returning empty table");
            None
        }
    }
}

pub fn load_historical_prices(path: &Path) -> PriceSeries {
    match read_source(path) {
        Some(raw) => schema::normalize_price_series(&raw),
        None => PriceSeries::empty(),
    }
}

pub fn load_state_purchases(path: &Path) -> StatePurchases {
    match read_source(path) {
        Some(raw) => schema::normalize_state_purchases(&raw),
        None => StatePurchases::empty(),
    }
}

/// `primary` is the monthly sales file, `secondary` the annual purchases
/// file used as a fallback (possibly as an annual/12 estimate).
pub fn load_january_sales(primary: &Path, secondary: &Path) -> JanuarySales {
    let primary = read_source(primary);
    let secondary = read_source(secondary);
    schema::normalize_january_sales(primary.as_ref(), secondary.as_ref())
}

pub fn load_karnataka_monthly(path: &Path) -> MonthlySeries {
    match read_source(path) {
        Some(raw) => schema::normalize_monthly_series(&raw),
        None => MonthlySeries::empty(),
    }
}
