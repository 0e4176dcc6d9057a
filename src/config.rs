// src/config.rs

use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

/// Everything a run needs, gathered into one value and passed down
/// explicitly. Nothing below the orchestrator reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint of the price service.
    pub base_url: String,
    /// Directory holding per-area root files and snapshot subdirectories.
    pub data_dir: PathBuf,
    /// JSON array of `{code, typeCode}` area-code entries.
    pub area_file: PathBuf,
    /// Earliest date the backward snapshot search will consider.
    pub epoch: NaiveDate,
    /// Static replay cookie sent with every request. The site invalidates
    /// these periodically; expect to refresh it by hand.
    pub cookie: String,
    pub request_timeout: Duration,
    /// Hard stop for the page loop, in case the site never returns an
    /// empty page.
    pub max_pages: u32,
    /// Pause between page fetches within one area.
    pub page_delay: Duration,
}

pub const BASE_URL: &str = "https://asuntojen.hintatiedot.fi/haku/";

// Session values captured from a real browser session. Stale cookies still
// return results, but refresh this if the site starts serving empty tables.
pub const DEFAULT_COOKIE: &str = "JSESSIONID=3BF142747A50736BF3E4785BD34E9D44; _ga=GA1.2.1547373825.1604316836; _gid=GA1.2.1909015753.1604316836; lang=0; textSize=3";

pub const COOKIE_ENV_VAR: &str = "HINTASEURANTA_COOKIE";

impl Config {
    /// Defaults, with the session cookie overridable from the environment.
    pub fn from_env() -> Self {
        let cookie =
            std::env::var(COOKIE_ENV_VAR).unwrap_or_else(|_| DEFAULT_COOKIE.to_string());

        Self {
            base_url: BASE_URL.to_string(),
            data_dir: PathBuf::from("data"),
            area_file: PathBuf::from("areas.json"),
            // First scrapes ran in November 2020; nothing older exists.
            epoch: NaiveDate::from_ymd_opt(2020, 11, 1).expect("valid epoch date"),
            cookie,
            request_timeout: Duration::from_secs(60),
            max_pages: 100,
            page_delay: Duration::from_secs(2),
        }
    }
}
