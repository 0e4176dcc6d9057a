mod extract;
mod fetch;
mod paginate;
mod scraper_error;

pub use extract::{extract_page, ExtractIssue, PageExtract};
pub use fetch::{HintatiedotClient, PageFetcher};
pub use paginate::{fetch_area, AreaScrape, PaginateOpts};
pub use scraper_error::ScrapeError;
