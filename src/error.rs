//! Error taxonomy for the settings pipeline.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors surfaced by the settings pipeline.
///
/// Only `UnknownOverrideId` gets bespoke handling in the CLI (it lists the
/// known default IDs); everything else terminates the run with its message.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading a user-supplied file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The engine binary could not be spawned.
    #[error("failed to run {program}: {source}")]
    EngineSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The engine ran but exited non-zero.
    #[error("{program} exited with {status}")]
    EngineFailed { program: String, status: ExitStatus },

    /// The engine produced no stdout at all.
    #[error("{program} produced no output")]
    EmptyEngineOutput { program: String },

    /// The last line of engine output was not valid JSON.
    #[error("last line of engine output is not valid JSON: {source}")]
    MalformedEngineOutput {
        #[source]
        source: serde_json::Error,
    },

    /// The engine's JSON lacked the `frontend_settings` array.
    #[error("engine output has no \"{key}\" array")]
    MissingFrontendSettings { key: &'static str },

    /// An entry in the `frontend_settings` array was not a settings object.
    #[error("malformed settings entry in engine output: {source}")]
    MalformedEntry {
        #[source]
        source: serde_json::Error,
    },

    /// The override file was not a JSON array of settings entries.
    #[error("{}: not a JSON array of override entries: {source}", path.display())]
    MalformedOverrides {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An override names a setting ID absent from both defaults and delta.
    #[error("could not find setting with ID {id}")]
    UnknownOverrideId { id: String, known: Vec<String> },

    /// Rendering the merged array failed.
    #[error("failed to serialize output: {source}")]
    Render {
        #[source]
        source: serde_json::Error,
    },
}
