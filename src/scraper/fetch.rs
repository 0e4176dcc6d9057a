// src/scraper/fetch.rs
use crate::config::Config;
use crate::scraper::ScrapeError;
use reqwest::blocking::Client;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, REFERER,
    UPGRADE_INSECURE_REQUESTS,
};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// One page fetch for one area. The transport is injected so everything
/// above it can run against canned markup.
pub trait PageFetcher {
    fn fetch_page(&self, area_code: &str, page: u32) -> Result<String, ScrapeError>;
}

/// Blocking client for the price service. Carries the fixed
/// browser-mimicking headers and the static session cookie on every
/// request.
pub struct HintatiedotClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HintatiedotClient {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let headers = build_headers(&config.base_url, &config.cookie)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            headers,
        })
    }
}

impl PageFetcher for HintatiedotClient {
    fn fetch_page(&self, area_code: &str, page: u32) -> Result<String, ScrapeError> {
        // The first request of an area is the plain search form submit; the
        // paginated follow-ups use a different parameter set where `z` is
        // the page number.
        let params: Vec<(&str, String)> = if page <= 1 {
            vec![
                ("c", String::new()),
                ("cr", "1".into()),
                ("ps", area_code.to_string()),
                ("nc", "0".into()),
                ("amin", String::new()),
                ("amax", String::new()),
                ("renderType", "renderTypeTable".into()),
                ("search", "1".into()),
            ]
        } else {
            vec![
                ("cr", "1".into()),
                ("ps", area_code.to_string()),
                ("t", "3".into()),
                ("l", "0".into()),
                ("z", page.to_string()),
                ("search", "1".into()),
                ("sf", "0".into()),
                ("so", "a".into()),
                ("renderType", "renderTypeTable".into()),
                ("print", "0".into()),
            ]
        };

        let resp = self
            .client
            .get(&self.base_url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Network(format!(
                "HTTP {status} for {} page {page}",
                area_code
            )));
        }

        resp.text().map_err(|e| ScrapeError::Network(e.to_string()))
    }
}

fn build_headers(base_url: &str, cookie: &str) -> Result<HeaderMap, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(
        REFERER,
        HeaderValue::from_str(base_url).map_err(|e| ScrapeError::Network(e.to_string()))?,
    );
    headers.insert(
        COOKIE,
        HeaderValue::from_str(cookie).map_err(|e| ScrapeError::Network(e.to_string()))?,
    );
    Ok(headers)
}
