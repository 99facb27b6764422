// Dashboard settings: where the data directory lives and what the source
// files inside it are called.
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub data_dir: PathBuf,
    pub historical_prices_file: String,
    pub state_purchases_file: String,
    pub monthly_sales_file: String,
    pub karnataka_monthly_file: String,
    pub states_geo_file: String,
}

impl DashboardSettings {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        DashboardSettings {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn historical_prices_path(&self) -> PathBuf {
        self.data_dir.join(&self.historical_prices_file)
    }

    pub fn state_purchases_path(&self) -> PathBuf {
        self.data_dir.join(&self.state_purchases_file)
    }

    pub fn monthly_sales_path(&self) -> PathBuf {
        self.data_dir.join(&self.monthly_sales_file)
    }

    pub fn karnataka_monthly_path(&self) -> PathBuf {
        self.data_dir.join(&self.karnataka_monthly_file)
    }

    pub fn states_geo_path(&self) -> PathBuf {
        self.data_dir.join(&self.states_geo_file)
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            data_dir: PathBuf::from("data"),
            historical_prices_file: "historical_silver_price.csv".to_string(),
            state_purchases_file: "state_wise_silver_purchased_kg.csv".to_string(),
            monthly_sales_file: "state_monthly_sales.csv".to_string(),
            karnataka_monthly_file: "karnataka_monthly.csv".to_string(),
            states_geo_file: "india_states_geo.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_join_data_dir() {
        let settings = DashboardSettings::with_data_dir("/srv/silver");
        assert_eq!(
            settings.historical_prices_path(),
            PathBuf::from("/srv/silver/historical_silver_price.csv")
        );
        assert_eq!(
            settings.states_geo_path(),
            PathBuf::from("/srv/silver/india_states_geo.json")
        );
    }
}
