// src/store/area_codes.rs
use crate::errors::StoreError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One entry of the area-code source list. Only postal-code entries
/// (`typeCode == "1"`) take part in a run.
#[derive(Debug, Deserialize)]
pub struct AreaCodeEntry {
    pub code: String,
    #[serde(rename = "typeCode")]
    pub type_code: String,
}

const POSTAL_CODE_TYPE: &str = "1";

/// Load the configured area codes: filtered to postal codes, sorted
/// ascending, duplicates removed.
pub fn load_area_codes(path: &Path) -> Result<Vec<String>, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
    let entries: Vec<AreaCodeEntry> = serde_json::from_str(&text)
        .map_err(|e| StoreError::Json(format!("{}: {e}", path.display())))?;

    let mut codes: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.type_code == POSTAL_CODE_TYPE)
        .map(|entry| entry.code)
        .collect();

    codes.sort();
    codes.dedup();

    Ok(codes)
}
