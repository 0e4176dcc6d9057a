// src/store/json_store.rs
use crate::domain::{date_stamp, Listing, RootEntry};
use crate::errors::StoreError;
use crate::store::ListingStore;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File layout under the base directory:
/// - `<area>.json`: root history, one array of entries with id and dates
/// - `<area>/<area>_<YYYYMMDD>.json`: one snapshot per day
#[derive(Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn root_path(&self, area_code: &str) -> PathBuf {
        self.base_dir.join(format!("{area_code}.json"))
    }

    fn snapshot_path(&self, area_code: &str, date: NaiveDate) -> PathBuf {
        self.base_dir
            .join(area_code)
            .join(format!("{area_code}_{}.json", date_stamp(date)))
    }
}

impl ListingStore for JsonStore {
    fn root_exists(&self, area_code: &str) -> Result<bool, StoreError> {
        Ok(self.root_path(area_code).exists())
    }

    fn load_root(&self, area_code: &str) -> Result<Vec<RootEntry>, StoreError> {
        read_json(&self.root_path(area_code))
    }

    fn save_root(&self, area_code: &str, entries: &[RootEntry]) -> Result<(), StoreError> {
        write_json(&self.root_path(area_code), &entries)
    }

    fn snapshot_exists(&self, area_code: &str, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(self.snapshot_path(area_code, date).exists())
    }

    fn load_snapshot(
        &self,
        area_code: &str,
        date: NaiveDate,
    ) -> Result<Vec<Listing>, StoreError> {
        read_json(&self.snapshot_path(area_code, date))
    }

    fn save_snapshot(
        &self,
        area_code: &str,
        date: NaiveDate,
        listings: &[Listing],
    ) -> Result<(), StoreError> {
        write_json(&self.snapshot_path(area_code, date), &listings)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text).map_err(|e| StoreError::Json(format!("{}: {e}", path.display())))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StoreError::Io(format!("{}: {e}", parent.display())))?;
    }

    let file =
        File::create(path).map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .map_err(|e| StoreError::Json(format!("{}: {e}", path.display())))
}
