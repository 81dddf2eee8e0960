//! Builds the JSON settings configuration for the Ultimate web interface.
//!
//! The Ultimate engine is queried twice (built-in defaults, and the delta
//! induced by a `.epf` settings file), optional overrides are folded in by
//! setting ID, and the merged array is rendered as indented JSON.

pub mod engine;
pub mod error;
pub mod overrides;
pub mod pipeline;
pub mod settings;

pub use engine::Engine;
pub use error::SettingsError;
pub use pipeline::{run, PipelineConfig};
pub use settings::{apply_overrides, SettingEntry};
