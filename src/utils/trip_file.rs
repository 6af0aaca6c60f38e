use std::{fs, path::Path};

use crate::{errors::ResidencyResult, trips::TripDraft};

/// Reads a JSON array of trip drafts. The drafts are not validated here.
pub fn load_drafts_from_file(path: &Path) -> ResidencyResult<Vec<TripDraft>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
