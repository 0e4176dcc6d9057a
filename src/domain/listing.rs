// src/domain/listing.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observed listing, one table row on the site.
///
/// Field names on the wire are camelCase; the snapshot and root files keep
/// the shape the original tooling wrote.
///
/// Numeric cells that fail to parse are stored as `None`, never as NaN, so
/// downstream code has to face the absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Size-bucket label from the section header row ("Yksiöt", "Kaksiot", ...).
    pub apartment_type: String,
    pub neighborhood: String,
    pub room_layout: String,
    pub building_type: String,
    pub area_sqm: Option<f64>,
    pub price: Option<f64>,
    pub price_per_sqm: Option<f64>,
    // Float on purpose: the site occasionally renders half-years.
    pub construction_year: Option<f64>,
    pub floor_info: String,
    pub has_elevator: bool,
    pub condition: String,
    pub ownership_type: String,
    pub energy_class: String,
    /// Derived identity, assigned before reconciliation and persisted with
    /// the record.
    #[serde(default)]
    pub fingerprint: String,
}

/// A listing as the root history knows it: the observed fields plus the
/// identity and lifecycle dates that only exist in the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootEntry {
    pub id: String,
    /// `YYYYMMDD`
    pub first_seen_date: String,
    /// `YYYYMMDD`
    pub last_seen_date: String,
    #[serde(flatten)]
    pub listing: Listing,
}

/// Calendar date in the `YYYYMMDD` form used by record fields and snapshot
/// filenames.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
