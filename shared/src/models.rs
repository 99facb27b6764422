use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of the historical silver price series. `price_per_kg` is
/// derived from `price_per_gram` at construction and kept alongside it
/// because the per-kg value drives the range filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price_per_gram: f64,
    pub price_per_kg: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price_per_gram: f64) -> Self {
        PricePoint {
            date,
            price_per_gram,
            price_per_kg: price_per_gram * 1000.0,
        }
    }
}

/// Historical price series, sorted ascending by date. Duplicate dates are
/// kept as they appeared in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub rows: Vec<PricePoint>,
}

impl PriceSeries {
    pub const COLUMNS: [&'static str; 2] = ["date", "price_per_gram"];

    pub fn empty() -> Self {
        PriceSeries { rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Annual silver purchases for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePurchase {
    pub state: String,
    pub total_kg: f64,
}

/// State-wise annual purchases. One row per source row; duplicate state
/// names are not aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePurchases {
    pub rows: Vec<StatePurchase>,
}

impl StatePurchases {
    pub const COLUMNS: [&'static str; 2] = ["state", "total_kg"];

    pub fn empty() -> Self {
        StatePurchases { rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// January silver sales for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JanuarySale {
    pub state: String,
    pub jan_kg: f64,
}

/// State-wise January sales. `estimated` is true when the figures were
/// derived by dividing annual totals by 12 rather than read from a monthly
/// column; consumers must surface that caveat alongside the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JanuarySales {
    pub rows: Vec<JanuarySale>,
    pub estimated: bool,
}

impl JanuarySales {
    pub const COLUMNS: [&'static str; 2] = ["state", "jan_kg"];

    pub fn empty() -> Self {
        JanuarySales {
            rows: Vec::new(),
            estimated: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One month of the Karnataka sales series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: NaiveDate,
    pub kg: f64,
}

/// Monthly sales series, sorted ascending by month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub rows: Vec<MonthlyPoint>,
}

impl MonthlySeries {
    pub const COLUMNS: [&'static str; 2] = ["month", "kg"];

    pub fn empty() -> Self {
        MonthlySeries { rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Weight unit for the calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Grams,
    Kilograms,
}

/// Per-kg price range filter for the historical chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBand {
    All,
    /// <= 20,000 INR/kg
    UpTo20k,
    /// strictly between 20,000 and 30,000 INR/kg
    Mid20kTo30k,
    /// >= 30,000 INR/kg
    From30k,
}

impl PriceBand {
    pub fn contains(&self, price_per_kg: f64) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::UpTo20k => price_per_kg <= 20_000.0,
            PriceBand::Mid20kTo30k => price_per_kg > 20_000.0 && price_per_kg < 30_000.0,
            PriceBand::From30k => price_per_kg >= 30_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_point_derives_per_kg() {
        let p = PricePoint::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), 60.0);
        assert_eq!(p.price_per_kg, 60_000.0);
    }

    #[test]
    fn test_empty_tables_have_documented_columns() {
        assert!(PriceSeries::empty().is_empty());
        assert_eq!(PriceSeries::COLUMNS, ["date", "price_per_gram"]);
        assert_eq!(StatePurchases::COLUMNS, ["state", "total_kg"]);
        assert_eq!(JanuarySales::COLUMNS, ["state", "jan_kg"]);
        assert_eq!(MonthlySeries::COLUMNS, ["month", "kg"]);
        assert!(!JanuarySales::empty().estimated);
    }

    #[test]
    fn test_price_band_boundaries() {
        assert!(PriceBand::UpTo20k.contains(20_000.0));
        assert!(!PriceBand::UpTo20k.contains(20_000.01));
        assert!(!PriceBand::Mid20kTo30k.contains(20_000.0));
        assert!(PriceBand::Mid20kTo30k.contains(25_000.0));
        assert!(!PriceBand::Mid20kTo30k.contains(30_000.0));
        assert!(PriceBand::From30k.contains(30_000.0));
        assert!(PriceBand::All.contains(0.0));
    }
}
