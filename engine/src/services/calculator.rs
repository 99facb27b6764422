//! Silver price calculator: weight and per-gram price in the base currency
//! (INR) converted into the display currency via a caller-supplied rate
//! table.

use shared::models::WeightUnit;
use std::collections::HashMap;
use tracing::warn;

/// Exchange rates relative to the base currency. An unknown currency
/// converts at 1.0, so the base amount passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>,
}

impl ExchangeRates {
    /// The built-in table used when no caller-supplied mapping is usable.
    pub fn default_table() -> Self {
        let mut rates = HashMap::new();
        rates.insert("INR".to_string(), 1.0);
        rates.insert("USD".to_string(), 0.012);
        rates.insert("EUR".to_string(), 0.011);
        ExchangeRates { rates }
    }

    /// Parses a JSON object of currency -> rate. Unparsable input falls
    /// back to the default table rather than failing.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<HashMap<String, f64>>(raw) {
            Ok(rates) => ExchangeRates { rates },
            Err(e) => {
                warn!(error = %e, "invalid exchange rate JSON, using default table");
                Self::default_table()
            }
        }
    }

    pub fn rate(&self, currency: &str) -> f64 {
        self.rates.get(currency).copied().unwrap_or(1.0)
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::default_table()
    }
}

/// A computed conversion: the weight in grams, the total in the base
/// currency, and the total in the display currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub grams: f64,
    pub total_base: f64,
    pub converted: f64,
}

pub fn convert(
    weight: f64,
    unit: WeightUnit,
    price_per_gram: f64,
    currency: &str,
    rates: &ExchangeRates,
) -> Quote {
    let grams = match unit {
        WeightUnit::Grams => weight,
        WeightUnit::Kilograms => weight * 1000.0,
    };
    let total_base = grams * price_per_gram;
    Quote {
        grams,
        total_base,
        converted: total_base * rates.rate(currency),
    }
}
