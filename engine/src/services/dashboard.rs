//! Dashboard service: wires the file loaders to the view-level operations
//! the front end asks for on every refresh. Stateless apart from the
//! settings; each call re-reads its sources.

use crate::config::settings::DashboardSettings;
use crate::data::{geo, loaders};
use shared::models::{
    JanuarySales, MonthlySeries, PriceBand, PriceSeries, StatePurchase, StatePurchases,
};
use std::cmp::Ordering;

pub struct DashboardService {
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(settings: DashboardSettings) -> Self {
        DashboardService { settings }
    }

    /// Historical price series restricted to a per-kg price band.
    pub fn historical(&self, band: PriceBand) -> PriceSeries {
        let series = loaders::load_historical_prices(&self.settings.historical_prices_path());
        filter_price_band(&series, band)
    }

    pub fn state_purchases(&self) -> StatePurchases {
        loaders::load_state_purchases(&self.settings.state_purchases_path())
    }

    /// Top `n` states by total purchases, descending.
    pub fn top_states(&self, n: usize) -> Vec<StatePurchase> {
        top_states(&self.state_purchases(), n)
    }

    /// January sales ranked descending by quantity. `estimated` marks
    /// figures derived as annual/12, not measured.
    pub fn january_sales(&self) -> JanuarySales {
        let mut sales = loaders::load_january_sales(
            &self.settings.monthly_sales_path(),
            &self.settings.state_purchases_path(),
        );
        sales
            .rows
            .sort_by(|a, b| compare_desc(a.jan_kg, b.jan_kg));
        sales
    }

    pub fn karnataka_monthly(&self) -> MonthlySeries {
        loaders::load_karnataka_monthly(&self.settings.karnataka_monthly_path())
    }

    /// Purchases joined against the boundary file's state keys: every
    /// mapped state appears once, with 0 kg when no purchase row matches.
    /// `None` when the boundary file is unavailable.
    pub fn state_coverage(&self) -> Option<Vec<StatePurchase>> {
        let geo_states = geo::load_state_names(&self.settings.states_geo_path())?;
        Some(state_coverage(&geo_states, &self.state_purchases()))
    }
}

pub fn filter_price_band(series: &PriceSeries, band: PriceBand) -> PriceSeries {
    PriceSeries {
        rows: series
            .rows
            .iter()
            .filter(|p| band.contains(p.price_per_kg))
            .cloned()
            .collect(),
    }
}

pub fn top_states(purchases: &StatePurchases, n: usize) -> Vec<StatePurchase> {
    let mut rows = purchases.rows.clone();
    rows.sort_by(|a, b| compare_desc(a.total_kg, b.total_kg));
    rows.truncate(n);
    rows
}

pub fn state_coverage(geo_states: &[String], purchases: &StatePurchases) -> Vec<StatePurchase> {
    geo_states
        .iter()
        .map(|state| {
            let total_kg = purchases
                .rows
                .iter()
                .find(|p| &p.state == state)
                .map(|p| p.total_kg)
                .unwrap_or(0.0);
            StatePurchase {
                state: state.clone(),
                total_kg,
            }
        })
        .collect()
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::DashboardSettings;
    use chrono::NaiveDate;
    use shared::models::PricePoint;
    use std::fs;
    use tempfile::TempDir;

    fn point(y: i32, price_per_gram: f64) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(y, 1, 1).unwrap(), price_per_gram)
    }

    fn purchases(rows: &[(&str, f64)]) -> StatePurchases {
        StatePurchases {
            rows: rows
                .iter()
                .map(|(state, total_kg)| StatePurchase {
                    state: state.to_string(),
                    total_kg: *total_kg,
                })
                .collect(),
        }
    }

    #[test]
    fn test_filter_price_band() {
        let series = PriceSeries {
            rows: vec![point(2018, 18.0), point(2020, 25.0), point(2022, 35.0)],
        };
        assert_eq!(filter_price_band(&series, PriceBand::All).rows.len(), 3);
        let low = filter_price_band(&series, PriceBand::UpTo20k);
        assert_eq!(low.rows.len(), 1);
        assert_eq!(low.rows[0].price_per_gram, 18.0);
        let mid = filter_price_band(&series, PriceBand::Mid20kTo30k);
        assert_eq!(mid.rows.len(), 1);
        assert_eq!(mid.rows[0].price_per_gram, 25.0);
        let high = filter_price_band(&series, PriceBand::From30k);
        assert_eq!(high.rows.len(), 1);
        assert_eq!(high.rows[0].price_per_gram, 35.0);
    }

    #[test]
    fn test_top_states_orders_and_truncates() {
        let p = purchases(&[("Goa", 5.0), ("Kerala", 1200.0), ("Karnataka", 800.0)]);
        let top = top_states(&p, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].state, "Kerala");
        assert_eq!(top[1].state, "Karnataka");
    }

    #[test]
    fn test_state_coverage_zero_fills_unmatched() {
        let geo = vec!["Kerala".to_string(), "Punjab".to_string()];
        let p = purchases(&[("Kerala", 1200.0)]);
        let coverage = state_coverage(&geo, &p);
        assert_eq!(coverage.len(), 2);
        assert_eq!(coverage[0].total_kg, 1200.0);
        assert_eq!(coverage[1].state, "Punjab");
        assert_eq!(coverage[1].total_kg, 0.0);
    }

    #[test]
    fn test_service_end_to_end_over_data_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("historical_silver_price.csv"),
            "Year,Month,Silver_Price_INR_per_kg\n2020,Feb,61000\n2020,Jan,60000\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("state_wise_silver_purchased_kg.csv"),
            "state,total_kg\nKerala,1200\nGoa,60\n",
        )
        .unwrap();

        let service = DashboardService::new(DashboardSettings::with_data_dir(dir.path()));

        let hist = service.historical(PriceBand::All);
        assert_eq!(hist.rows.len(), 2);
        assert_eq!(hist.rows[0].price_per_gram, 60.0);

        let top = service.top_states(5);
        assert_eq!(top[0].state, "Kerala");

        // no monthly sales file: January comes from annual/12 and is
        // flagged as an estimate
        let jan = service.january_sales();
        assert!(jan.estimated);
        assert_eq!(jan.rows[0].state, "Kerala");
        assert_eq!(jan.rows[0].jan_kg, 100.0);

        // no boundary file: map coverage is unavailable, not an error
        assert!(service.state_coverage().is_none());

        // no karnataka file: empty series
        assert!(service.karnataka_monthly().is_empty());
    }
}
