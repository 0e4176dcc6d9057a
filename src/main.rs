use crate::config::Config;
use crate::ids::RandomIds;
use crate::scraper::HintatiedotClient;
use crate::store::JsonStore;
use chrono::Local;

mod config;
mod domain;
mod errors;
mod ids;
mod orchestrator;
mod scraper;
mod store;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::from_env();

    let fetcher = match HintatiedotClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };

    let store = JsonStore::new(&config.data_dir);
    let mut ids = RandomIds;
    let today = Local::now().date_naive();

    match orchestrator::run(&config, &store, &fetcher, &mut ids, today) {
        Ok(report) => {
            eprintln!(
                "✅ Run complete: {} areas processed, {} skipped, {} pages, {} listings, {} new, {} anomalies",
                report.areas_processed,
                report.areas_skipped,
                report.pages_fetched,
                report.listings_seen,
                report.new_listings,
                report.anomalies
            );
        }
        Err(e) => {
            eprintln!("❌ Run failed: {e}");
            std::process::exit(1);
        }
    }
}
