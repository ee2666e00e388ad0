//! Resources directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the resources directory.
pub const RESOURCES_ENV_VAR: &str = "DIF_RESOURCES_DIR";

pub const LICENSES_FILE: &str = "licenses.json";
pub const COMMUNITIES_FILE: &str = "communities.json";
pub const FILE_FORMATS_FILE: &str = "mimeData.json";
pub const TARGET_GROUPS_FILE: &str = "target_audience.csv";

/// Get the resources root directory.
///
/// Resolution order:
/// 1. `DIF_RESOURCES_DIR` environment variable
/// 2. `resources/` directory relative to workspace root
pub fn resources_root() -> PathBuf {
    if let Ok(root) = std::env::var(RESOURCES_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}
