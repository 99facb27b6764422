//! Schema normalization: turns a [`RawTable`] of unknown column names and
//! order into the fixed-schema table for one of the dashboard's purposes.
//!
//! Recognition is an ordered list of named matchers, each a pure predicate
//! plus transform, tried in priority order; the first predicate match wins.
//! A transform failure after a match is a total failure for that purpose,
//! not a fall-through to the next matcher. Nothing here returns an error:
//! every failure degrades to the purpose's empty table so the dashboard
//! always has something well-formed to render.

use crate::data::raw_table::RawTable;
use shared::models::{
    JanuarySale, JanuarySales, MonthlyPoint, MonthlySeries, PricePoint, PriceSeries,
    StatePurchase, StatePurchases,
};
use tracing::debug;

pub mod coerce;

/// One recognized table layout: a predicate that inspects column names and
/// a transform that produces the normalized table, or None when a cell
/// defeats the layout's parsing rules.
struct SchemaMatcher<T> {
    name: &'static str,
    matches: fn(&RawTable) -> bool,
    transform: fn(&RawTable) -> Option<T>,
}

fn run_matchers<T>(purpose: &str, raw: &RawTable, matchers: &[SchemaMatcher<T>], empty: fn() -> T) -> T {
    for matcher in matchers {
        if (matcher.matches)(raw) {
            debug!(purpose, layout = matcher.name, "table layout matched");
            return match (matcher.transform)(raw) {
                Some(table) => table,
                None => {
                    debug!(purpose, layout = matcher.name, "transform failed, degrading to empty table");
                    empty()
                }
            };
        }
    }
    debug!(purpose, "no table layout matched, degrading to empty table");
    empty()
}

/// Normalizes a historical price table to (`date`, `price_per_gram`) rows
/// sorted ascending by date, with `price_per_kg` derived.
pub fn normalize_price_series(raw: &RawTable) -> PriceSeries {
    let matchers: &[SchemaMatcher<PriceSeries>] = &[
        SchemaMatcher {
            name: "direct",
            matches: |raw| raw.find_exact("date").is_some() && raw.find_exact("price_per_gram").is_some(),
            transform: price_series_direct,
        },
        SchemaMatcher {
            name: "year-month-per-kg",
            matches: |raw| {
                raw.find_exact("Year").is_some()
                    && raw.find_exact("Month").is_some()
                    && raw.find_exact("Silver_Price_INR_per_kg").is_some()
            },
            transform: price_series_year_month,
        },
        SchemaMatcher {
            name: "positional",
            matches: |raw| raw.column_count() >= 2,
            transform: price_series_positional,
        },
    ];
    run_matchers("price_series", raw, matchers, PriceSeries::empty)
}

fn price_series_direct(raw: &RawTable) -> Option<PriceSeries> {
    // Predicate guarantees both columns exist.
    let date_col = raw.find_exact("date")?;
    let price_col = raw.find_exact("price_per_gram")?;

    let mut rows = Vec::with_capacity(raw.row_count());
    for i in 0..raw.row_count() {
        let date = coerce::parse_date(raw.cell(i, date_col))?;
        let price = coerce::parse_number(raw.cell(i, price_col))?;
        rows.push(PricePoint::new(date, price));
    }
    rows.sort_by_key(|p| p.date);
    Some(PriceSeries { rows })
}

fn price_series_year_month(raw: &RawTable) -> Option<PriceSeries> {
    let year_col = raw.find_exact("Year")?;
    let month_col = raw.find_exact("Month")?;
    let per_kg_col = raw.find_exact("Silver_Price_INR_per_kg")?;

    let mut rows = Vec::with_capacity(raw.row_count());
    for i in 0..raw.row_count() {
        let year: i32 = raw.cell(i, year_col).trim().parse().ok()?;
        // Month cells may mix names and numeric indexes; each row resolves
        // on its own.
        let month = coerce::parse_month(raw.cell(i, month_col))?;
        let date = chrono::NaiveDate::from_ymd_opt(year, month, 1)?;
        let per_kg = coerce::parse_number(raw.cell(i, per_kg_col))?;
        rows.push(PricePoint::new(date, per_kg / 1000.0));
    }
    rows.sort_by_key(|p| p.date);
    Some(PriceSeries { rows })
}

fn price_series_positional(raw: &RawTable) -> Option<PriceSeries> {
    // First column reads as the date, second as the price; rows where
    // either fails to coerce are dropped rather than failing the load.
    let mut rows = Vec::new();
    for i in 0..raw.row_count() {
        let date = coerce::parse_date(raw.cell(i, 0));
        let price = coerce::parse_number(raw.cell(i, 1));
        if let (Some(date), Some(price)) = (date, price) {
            rows.push(PricePoint::new(date, price));
        }
    }
    rows.sort_by_key(|p| p.date);
    Some(PriceSeries { rows })
}

/// Normalizes a state purchases table to (`state`, `total_kg`) rows.
/// Duplicate state names stay as separate rows; unparsable quantities
/// become 0.
pub fn normalize_state_purchases(raw: &RawTable) -> StatePurchases {
    let qty_col = raw
        .find_ci("total_kg")
        .or_else(|| raw.find_ci("silver_purchased_kg"))
        .or_else(|| (raw.column_count() > 1).then_some(1));
    let qty_col = match qty_col {
        Some(col) => col,
        None => {
            debug!(purpose = "state_purchases", "no usable quantity column, degrading to empty table");
            return StatePurchases::empty();
        }
    };
    let state_col = raw.find_ci("state").unwrap_or(0);

    let rows = (0..raw.row_count())
        .map(|i| StatePurchase {
            state: raw.cell(i, state_col).to_string(),
            total_kg: coerce::parse_number(raw.cell(i, qty_col)).unwrap_or(0.0),
        })
        .collect();
    StatePurchases { rows }
}

/// Normalizes January sales to (`state`, `jan_kg`) rows. The monthly table
/// is preferred; an annual table's `jan` column is next; lastly January is
/// estimated as annual/12 and the result is flagged `estimated`.
pub fn normalize_january_sales(
    primary: Option<&RawTable>,
    secondary: Option<&RawTable>,
) -> JanuarySales {
    if let Some(raw) = primary {
        // An already-normalized table (a `jan_kg` column) passes straight
        // through instead of being re-estimated.
        if let Some(jan_col) = raw.find_exact("Jan").or_else(|| raw.find_exact("jan_kg")) {
            debug!(purpose = "january_sales", layout = "monthly-jan-column", "table layout matched");
            return january_from(raw, jan_col, false);
        }
    }
    if let Some(raw) = secondary {
        if let Some(jan_col) = raw.find_ci("jan").or_else(|| raw.find_exact("jan_kg")) {
            debug!(purpose = "january_sales", layout = "annual-jan-column", "table layout matched");
            return january_from(raw, jan_col, false);
        }
        let total_col = raw
            .find_containing_ci(&["total", "silver"])
            .or_else(|| (raw.column_count() > 1).then_some(1));
        if let Some(total_col) = total_col {
            debug!(purpose = "january_sales", layout = "annual-estimate", "estimating January as annual/12");
            let state_col = raw.find_ci("state").unwrap_or(0);
            let rows = (0..raw.row_count())
                .map(|i| {
                    let annual_kg = coerce::parse_number(raw.cell(i, total_col)).unwrap_or(0.0);
                    JanuarySale {
                        state: raw.cell(i, state_col).to_string(),
                        jan_kg: coerce::round2(annual_kg / 12.0),
                    }
                })
                .collect();
            return JanuarySales { rows, estimated: true };
        }
    }
    debug!(purpose = "january_sales", "no source yielded data, degrading to empty table");
    JanuarySales::empty()
}

fn january_from(raw: &RawTable, jan_col: usize, estimated: bool) -> JanuarySales {
    let state_col = raw.find_ci("state").unwrap_or(0);
    let rows = (0..raw.row_count())
        .map(|i| JanuarySale {
            state: raw.cell(i, state_col).to_string(),
            jan_kg: coerce::parse_number(raw.cell(i, jan_col)).unwrap_or(0.0),
        })
        .collect();
    JanuarySales { rows, estimated }
}

/// Normalizes a monthly sales table (the Karnataka series) to
/// (`month`, `kg`) rows sorted ascending by month. Rows with unparsable
/// months are dropped; unparsable quantities become 0.
pub fn normalize_monthly_series(raw: &RawTable) -> MonthlySeries {
    let matchers: &[SchemaMatcher<MonthlySeries>] = &[SchemaMatcher {
        name: "month-kg",
        matches: |raw| {
            raw.find_ci("kg").is_some() || raw.column_count() >= 2
        },
        transform: monthly_series_transform,
    }];
    run_matchers("monthly_series", raw, matchers, MonthlySeries::empty)
}

fn monthly_series_transform(raw: &RawTable) -> Option<MonthlySeries> {
    let month_col = raw.find_ci("month").unwrap_or(0);
    let kg_col = raw
        .find_ci("kg")
        .or_else(|| (raw.column_count() > 1).then_some(1))?;

    let mut rows = Vec::new();
    for i in 0..raw.row_count() {
        if let Some(month) = coerce::parse_date(raw.cell(i, month_col)) {
            rows.push(MonthlyPoint {
                month,
                kg: coerce::parse_number(raw.cell(i, kg_col)).unwrap_or(0.0),
            });
        }
    }
    rows.sort_by_key(|p| p.month);
    Some(MonthlySeries { rows })
}
