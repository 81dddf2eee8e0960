//! End-to-end settings pipeline.
//!
//! Defaults query, delta query, override load, merge, render. Strictly
//! sequential; each engine call blocks until the engine exits.

use std::path::PathBuf;

use crate::engine::Engine;
use crate::error::SettingsError;
use crate::overrides;
use crate::settings::{apply_overrides, SettingEntry};

/// Validated input paths for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// The `.epf` settings file used as basis for the delta query.
    pub settings: PathBuf,

    /// Toolchain descriptor passed through to the engine.
    pub toolchain: PathBuf,

    /// Optional override file.
    pub override_file: Option<PathBuf>,
}

/// Run the full pipeline and return the rendered JSON document.
pub fn run(engine: &Engine, config: &PipelineConfig) -> Result<String, SettingsError> {
    let defaults = engine.query_defaults(&config.toolchain)?;
    let delta = engine.query_delta(&config.toolchain, &config.settings)?;
    let overrides = overrides::load(config.override_file.as_deref())?;

    let merged = apply_overrides(&defaults, delta, &overrides)?;

    render(&merged)
}

/// Render the merged array as 2-space-indented JSON (no trailing newline;
/// the CLI appends one when printing to stdout).
pub fn render(entries: &[SettingEntry]) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(entries).map_err(|e| SettingsError::Render { source: e })
}
