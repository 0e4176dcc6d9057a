mod area_codes;
mod json_store;

pub use area_codes::load_area_codes;
pub use json_store::JsonStore;

use crate::domain::{Listing, RootEntry};
use crate::errors::StoreError;
use chrono::NaiveDate;

/// Durable state for one area: the growing root history and the immutable
/// dated snapshots. Behind a trait so tests run against an in-memory fake.
pub trait ListingStore {
    fn root_exists(&self, area_code: &str) -> Result<bool, StoreError>;
    fn load_root(&self, area_code: &str) -> Result<Vec<RootEntry>, StoreError>;
    fn save_root(&self, area_code: &str, entries: &[RootEntry]) -> Result<(), StoreError>;

    fn snapshot_exists(&self, area_code: &str, date: NaiveDate) -> Result<bool, StoreError>;
    fn load_snapshot(&self, area_code: &str, date: NaiveDate)
        -> Result<Vec<Listing>, StoreError>;
    fn save_snapshot(
        &self,
        area_code: &str,
        date: NaiveDate,
        listings: &[Listing],
    ) -> Result<(), StoreError>;
}

/// Most recent snapshot strictly before `today`: walk backward one day at a
/// time until something is found or the epoch boundary is passed. Linear in
/// elapsed days, which only matters for areas with long gaps.
pub fn find_previous_snapshot(
    store: &dyn ListingStore,
    area_code: &str,
    today: NaiveDate,
    epoch: NaiveDate,
) -> Result<Option<(NaiveDate, Vec<Listing>)>, StoreError> {
    let mut date = match today.pred_opt() {
        Some(d) => d,
        None => return Ok(None),
    };

    while date >= epoch {
        if store.snapshot_exists(area_code, date)? {
            let listings = store.load_snapshot(area_code, date)?;
            return Ok(Some((date, listings)));
        }
        date = match date.pred_opt() {
            Some(d) => d,
            None => break,
        };
    }

    Ok(None)
}
