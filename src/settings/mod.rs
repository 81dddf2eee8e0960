//! Settings entry data model and shallow-merge semantics.
//!
//! A settings entry is an opaque JSON object with one interpreted field: its
//! `id`. Merging is field-level replacement (a nested-object field from the
//! overlay fully replaces the base field, never merged recursively).

mod merge;

pub use merge::apply_overrides;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One frontend settings entry.
///
/// `id` is required and unique within an array at any pipeline stage; all
/// other fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    pub id: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SettingEntry {
    /// Overwrite each field present in `overlay` onto this entry.
    ///
    /// Fields absent from `overlay` are retained. Shallow by contract.
    pub fn apply(&mut self, overlay: &SettingEntry) {
        for (key, value) in &overlay.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Shallow merge of this entry with `overlay`, overlay fields winning.
    pub fn merged_with(&self, overlay: &SettingEntry) -> SettingEntry {
        let mut merged = self.clone();
        merged.apply(overlay);
        merged
    }
}
