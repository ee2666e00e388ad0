use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::error::{Result, StandardsError};
use crate::loaders::{load_communities, load_file_formats, load_licenses, load_target_groups};
use crate::paths::{
    COMMUNITIES_FILE, FILE_FORMATS_FILE, LICENSES_FILE, TARGET_GROUPS_FILE, resources_root,
};

/// Picklists consulted by the attribute checks.
///
/// Loaded once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub licenses: BTreeSet<String>,
    pub communities: BTreeSet<String>,
    pub file_formats: BTreeSet<String>,
    pub target_groups: BTreeSet<String>,
}

/// Sizes of the loaded picklists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSummary {
    pub licenses: usize,
    pub communities: usize,
    pub file_formats: usize,
    pub target_groups: usize,
}

impl ReferenceData {
    pub fn summary(&self) -> ReferenceSummary {
        ReferenceSummary {
            licenses: self.licenses.len(),
            communities: self.communities.len(),
            file_formats: self.file_formats.len(),
            target_groups: self.target_groups.len(),
        }
    }

    pub fn with_licenses<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.licenses = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_communities<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.communities = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file_formats<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_formats = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_target_groups<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_groups = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Load all picklists from a resources directory.
///
/// Any missing or unparsable file fails the whole load.
pub fn load_reference_data(dir: &Path) -> Result<ReferenceData> {
    if !dir.is_dir() {
        return Err(StandardsError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    let data = ReferenceData {
        licenses: load_licenses(&dir.join(LICENSES_FILE))?,
        communities: load_communities(&dir.join(COMMUNITIES_FILE))?,
        file_formats: load_file_formats(&dir.join(FILE_FORMATS_FILE))?,
        target_groups: load_target_groups(&dir.join(TARGET_GROUPS_FILE))?,
    };
    let summary = data.summary();
    info!(
        resources = %dir.display(),
        licenses = summary.licenses,
        communities = summary.communities,
        file_formats = summary.file_formats,
        target_groups = summary.target_groups,
        "reference data loaded"
    );
    Ok(data)
}

pub fn load_default_reference_data() -> Result<ReferenceData> {
    load_reference_data(&resources_root())
}
