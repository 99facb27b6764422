// Engine entry point: loads the data directory once and logs a summary of
// every dashboard table, standing in for the front end's refresh cycle.
use anyhow::Result;
use engine::config::settings::DashboardSettings;
use engine::services::calculator::{self, ExchangeRates};
use engine::services::dashboard::DashboardService;
use shared::models::{PriceBand, WeightUnit};
use shared::utils::format_amount;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting silver dashboard engine...");

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let settings = DashboardSettings::with_data_dir(&data_dir);
    info!(data_dir = %data_dir, "Loading dashboard sources");
    let service = DashboardService::new(settings);

    let rates = ExchangeRates::default();
    let quote = calculator::convert(100.0, WeightUnit::Grams, 100.0, "INR", &rates);
    info!(
        grams = quote.grams,
        total_inr = %format_amount(quote.total_base, 2),
        converted = %format_amount(quote.converted, 2),
        "Calculator sample (100 g at 100 INR/g)"
    );

    let hist = service.historical(PriceBand::All);
    info!(rows = hist.rows.len(), "Historical price series loaded");

    for purchase in service.top_states(5) {
        info!(
            state = %purchase.state,
            total_kg = %format_amount(purchase.total_kg, 2),
            "Top state by silver purchases"
        );
    }

    let january = service.january_sales();
    if january.estimated {
        info!("January figures are estimated from annual totals (annual/12)");
    }
    info!(rows = january.rows.len(), "January sales loaded");

    let karnataka = service.karnataka_monthly();
    info!(rows = karnataka.rows.len(), "Karnataka monthly series loaded");

    match service.state_coverage() {
        Some(coverage) => info!(states = coverage.len(), "State boundary coverage computed"),
        None => info!("State boundary file unavailable, map coverage skipped"),
    }

    Ok(())
}
