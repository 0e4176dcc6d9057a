// errors.rs
use crate::scraper::ScrapeError;
use std::fmt;

/// Errors from the durable store (JSON files on disk).
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Json(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Store I/O error: {msg}"),
            StoreError::Json(msg) => write!(f, "Store JSON error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// A failure that aborts the whole run. Per-record problems never become
/// one of these; they are reported as events and the loop continues.
#[derive(Debug)]
pub enum RunError {
    Scrape(ScrapeError),
    Store(StoreError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Scrape(e) => write!(f, "Scrape failed: {e}"),
            RunError::Store(e) => write!(f, "Persistence failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {}
