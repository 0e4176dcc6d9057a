// src/tests/paginate_tests.rs

use crate::scraper::{fetch_area, PaginateOpts, ScrapeError};
use crate::tests::fixtures::{single_listing_page, FailingFetcher, FakeFetcher};
use std::time::Duration;

fn opts() -> PaginateOpts {
    PaginateOpts {
        max_pages: 10,
        page_delay: Duration::ZERO,
    }
}

#[test]
fn stops_at_the_first_empty_page_and_concatenates_in_order() {
    let fetcher = FakeFetcher::new(vec![
        single_listing_page("Yksiöt", "Keskusta"),
        single_listing_page("Yksiöt", "Tapiola"),
        single_listing_page("Kaksiot", "Otaniemi"),
    ]);

    let scrape = fetch_area(&fetcher, "02100", &opts()).unwrap();

    let neighborhoods: Vec<&str> = scrape
        .listings
        .iter()
        .map(|l| l.neighborhood.as_str())
        .collect();
    assert_eq!(neighborhoods, vec!["Keskusta", "Tapiola", "Otaniemi"]);
    assert_eq!(scrape.pages_fetched, 3);
    // Three listing pages plus the empty page that ends the loop.
    assert_eq!(fetcher.calls.get(), 4);
}

#[test]
fn empty_first_page_means_no_listings() {
    let fetcher = FakeFetcher::new(vec![]);

    let scrape = fetch_area(&fetcher, "02100", &opts()).unwrap();

    assert!(scrape.listings.is_empty());
    assert_eq!(scrape.pages_fetched, 0);
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn page_cap_stops_a_runaway_source() {
    // Every page has listings; without the cap this would never stop.
    let pages: Vec<String> = (0..20)
        .map(|i| single_listing_page("Yksiöt", &format!("Alue{i}")))
        .collect();
    let fetcher = FakeFetcher::new(pages);

    let capped = PaginateOpts {
        max_pages: 3,
        page_delay: Duration::ZERO,
    };
    let scrape = fetch_area(&fetcher, "02100", &capped).unwrap();

    assert_eq!(scrape.pages_fetched, 3);
    assert_eq!(scrape.listings.len(), 3);
    assert_eq!(fetcher.calls.get(), 3);
}

#[test]
fn transport_failure_propagates() {
    let result = fetch_area(&FailingFetcher, "02100", &opts());

    match result {
        Err(ScrapeError::Network(_)) => {}
        other => panic!("expected a network error, got {other:?}"),
    }
}
