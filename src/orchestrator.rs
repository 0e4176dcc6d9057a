// src/orchestrator.rs
use crate::config::Config;
use crate::domain::{assign_fingerprints, date_stamp, reconcile, ReconcileEvent};
use crate::errors::RunError;
use crate::ids::IdGenerator;
use crate::scraper::{fetch_area, PageFetcher, PaginateOpts};
use crate::store::{find_previous_snapshot, load_area_codes, ListingStore};
use chrono::NaiveDate;

/// Aggregate of one full run across all configured areas.
#[derive(Debug, Default)]
pub struct RunReport {
    pub areas_processed: usize,
    pub areas_skipped: usize,
    pub pages_fetched: usize,
    pub listings_seen: usize,
    pub new_listings: usize,
    pub anomalies: usize,
}

/// Process every configured area for `today`, strictly in order.
///
/// Areas whose snapshot for today already exists are skipped without a
/// single fetch, which is what makes a restarted run resume where the
/// previous one stopped. A transport or persistence failure aborts the
/// run; areas finished before it are already durable.
pub fn run(
    config: &Config,
    store: &dyn ListingStore,
    fetcher: &dyn PageFetcher,
    ids: &mut dyn IdGenerator,
    today: NaiveDate,
) -> Result<RunReport, RunError> {
    let areas = load_area_codes(&config.area_file).map_err(RunError::Store)?;
    eprintln!("🧵 Run for {}: {} areas", date_stamp(today), areas.len());

    let mut report = RunReport::default();

    for area in &areas {
        if store.snapshot_exists(area, today).map_err(RunError::Store)? {
            eprintln!("🔁 Area {area} already scraped today, skipping");
            report.areas_skipped += 1;
            continue;
        }

        process_area(config, store, fetcher, ids, area, today, &mut report)?;
        report.areas_processed += 1;
    }

    Ok(report)
}

fn process_area(
    config: &Config,
    store: &dyn ListingStore,
    fetcher: &dyn PageFetcher,
    ids: &mut dyn IdGenerator,
    area: &str,
    today: NaiveDate,
    report: &mut RunReport,
) -> Result<(), RunError> {
    // Root existence is what tells a first-ever run apart from an old area
    // whose snapshots have aged out of the search window.
    let first_run = !store.root_exists(area).map_err(RunError::Store)?;
    let mut root = if first_run {
        eprintln!("📄 Area {area}: first run, starting an empty history");
        Vec::new()
    } else {
        store.load_root(area).map_err(RunError::Store)?
    };

    let opts = PaginateOpts {
        max_pages: config.max_pages,
        page_delay: config.page_delay,
    };
    let scrape = fetch_area(fetcher, area, &opts).map_err(RunError::Scrape)?;

    for issue in &scrape.issues {
        eprintln!("⚠️ Area {area}: {issue}");
    }

    let mut today_listings = scrape.listings;
    assign_fingerprints(&mut today_listings);

    let previous =
        find_previous_snapshot(store, area, today, config.epoch).map_err(RunError::Store)?;
    match &previous {
        Some((date, listings)) => eprintln!(
            "✅ Area {area}: previous snapshot {} ({} listings)",
            date_stamp(*date),
            listings.len()
        ),
        None if first_run => {}
        None => eprintln!(
            "⚠️ Area {area}: no snapshot found back to {}",
            date_stamp(config.epoch)
        ),
    }

    let summary = reconcile(
        &today_listings,
        previous.as_ref().map(|(_, listings)| listings.as_slice()),
        &mut root,
        &date_stamp(today),
        ids,
    );

    for event in summary.events.iter().filter(|e| e.is_anomaly()) {
        match event {
            ReconcileEvent::MissingFromRoot { fingerprint } => {
                eprintln!("❌ Area {area}: snapshotted but missing from root: {fingerprint}")
            }
            ReconcileEvent::Reappeared {
                fingerprint,
                last_seen,
            } => eprintln!("⚠️ Area {area}: reappeared, last seen {last_seen}: {fingerprint}"),
            _ => {}
        }
    }

    // Root before snapshot: if the process dies between the two writes, the
    // next run redoes this area and the already-promoted records land on
    // the warning path instead of being duplicated.
    store.save_root(area, &root).map_err(RunError::Store)?;
    store
        .save_snapshot(area, today, &today_listings)
        .map_err(RunError::Store)?;

    eprintln!(
        "✅ Area {area}: {} listings, {} new, {} continued",
        today_listings.len(),
        summary.new_listings,
        summary.continued
    );

    report.pages_fetched += scrape.pages_fetched;
    report.listings_seen += today_listings.len();
    report.new_listings += summary.new_listings;
    report.anomalies += summary.reappeared + summary.integrity_violations;

    Ok(())
}
