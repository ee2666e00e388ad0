use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, StandardsError};

/// SPDX license list document; only the identifiers are used.
#[derive(Debug, Deserialize)]
struct LicenseList {
    licenses: Vec<LicenseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseEntry {
    license_id: String,
}

#[derive(Debug, Deserialize)]
struct CommunityList {
    subsidiaries: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MimeEntry {
    #[serde(default)]
    file_types: Vec<String>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| StandardsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load license identifiers (`licenseId`) from an SPDX license list.
pub fn load_licenses(path: &Path) -> Result<BTreeSet<String>> {
    let list: LicenseList = read_json(path)?;
    let licenses: BTreeSet<String> = list
        .licenses
        .into_iter()
        .map(|entry| entry.license_id)
        .collect();
    debug!(path = %path.display(), count = licenses.len(), "loaded licenses");
    Ok(licenses)
}

/// Load subsidiary community names.
pub fn load_communities(path: &Path) -> Result<BTreeSet<String>> {
    let list: CommunityList = read_json(path)?;
    let communities: BTreeSet<String> = list.subsidiaries.into_iter().collect();
    debug!(path = %path.display(), count = communities.len(), "loaded communities");
    Ok(communities)
}

/// Load file extensions, flattening the `fileTypes` of every MIME entry.
pub fn load_file_formats(path: &Path) -> Result<BTreeSet<String>> {
    let entries: Vec<MimeEntry> = read_json(path)?;
    let formats: BTreeSet<String> = entries
        .into_iter()
        .flat_map(|entry| entry.file_types)
        .collect();
    debug!(path = %path.display(), count = formats.len(), "loaded file formats");
    Ok(formats)
}

/// Load target groups from the first column of the target-audience table.
pub fn load_target_groups(path: &Path) -> Result<BTreeSet<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| StandardsError::csv(path, &error))?;

    let mut groups = BTreeSet::new();
    for record in reader.records() {
        let record = record.map_err(|error| StandardsError::csv(path, &error))?;
        let value = record
            .get(0)
            .unwrap_or("")
            .trim_matches('\u{feff}')
            .trim();
        if !value.is_empty() {
            groups.insert(value.to_string());
        }
    }
    debug!(path = %path.display(), count = groups.len(), "loaded target groups");
    Ok(groups)
}
