//! Override application over default and delta settings.
//!
//! Linear and order-preserving: delta entries keep their relative order,
//! defaults promoted by an override are appended in override-file order.

use crate::error::SettingsError;
use crate::settings::SettingEntry;

/// Fold `overrides` into `delta`, consulting `defaults` for IDs that are not
/// yet part of the delta.
///
/// For each override, in order:
/// - ID present in delta: override fields overwrite that entry in place.
/// - ID only present in defaults: the default entry plus override fields is
///   appended to the delta.
/// - ID in neither: `UnknownOverrideId`, carrying all default IDs.
pub fn apply_overrides(
    defaults: &[SettingEntry],
    mut delta: Vec<SettingEntry>,
    overrides: &[SettingEntry],
) -> Result<Vec<SettingEntry>, SettingsError> {
    for entry in overrides {
        if let Some(existing) = delta.iter_mut().find(|e| e.id == entry.id) {
            existing.apply(entry);
        } else if let Some(default) = defaults.iter().find(|e| e.id == entry.id) {
            delta.push(default.merged_with(entry));
        } else {
            return Err(SettingsError::UnknownOverrideId {
                id: entry.id.clone(),
                known: defaults.iter().map(|e| e.id.clone()).collect(),
            });
        }
    }
    Ok(delta)
}
