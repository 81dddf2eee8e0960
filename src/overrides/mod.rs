//! Override file loading.
//!
//! An override file is a JSON array of partial settings entries; each must
//! carry an `id`, all other fields replace the same-named fields of the
//! matching setting. By default all settings are invisible in the web
//! interface, so overrides are also how settings get surfaced there.

use std::fs;
use std::path::Path;

use crate::error::SettingsError;
use crate::settings::SettingEntry;

/// Load override entries from `path`, or an empty vec when no file is given.
pub fn load(path: Option<&Path>) -> Result<Vec<SettingEntry>, SettingsError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let content = fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| SettingsError::MalformedOverrides {
        path: path.to_path_buf(),
        source: e,
    })
}
