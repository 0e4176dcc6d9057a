// src/scraper/paginate.rs
use crate::domain::Listing;
use crate::scraper::{extract_page, ExtractIssue, PageFetcher, ScrapeError};
use std::time::Duration;

pub struct PaginateOpts {
    /// Hard ceiling on pages per area. The site signals the end of results
    /// with an empty page; the cap is there for the day it stops doing so.
    pub max_pages: u32,
    /// Pause between page fetches. Zero in tests.
    pub page_delay: Duration,
}

#[derive(Debug)]
pub struct AreaScrape {
    pub listings: Vec<Listing>,
    pub issues: Vec<ExtractIssue>,
    pub pages_fetched: usize,
}

/// Fetch one area across its pages: start at page 1, stop at the first page
/// without listings, concatenate the rest in page order.
pub fn fetch_area(
    fetcher: &dyn PageFetcher,
    area_code: &str,
    opts: &PaginateOpts,
) -> Result<AreaScrape, ScrapeError> {
    let mut result = AreaScrape {
        listings: Vec::new(),
        issues: Vec::new(),
        pages_fetched: 0,
    };

    let mut page = 1;

    loop {
        eprintln!("📄 Fetching area {area_code} page {page}");

        let html = fetcher.fetch_page(area_code, page)?;
        let mut extract = extract_page(&html)?;

        // Keep issues even from the terminating page.
        result.issues.append(&mut extract.issues);

        if extract.listings.is_empty() {
            eprintln!("🏁 Area {area_code}: empty page {page}, done");
            break;
        }

        eprintln!(
            "✅ Area {area_code} page {page} parsed ({} listings)",
            extract.listings.len()
        );

        result.listings.append(&mut extract.listings);
        result.pages_fetched += 1;

        if page >= opts.max_pages {
            eprintln!("⚠️ Area {area_code}: page cap {} reached, stopping", opts.max_pages);
            break;
        }

        page += 1;

        if !opts.page_delay.is_zero() {
            std::thread::sleep(opts.page_delay);
        }
    }

    Ok(result)
}
