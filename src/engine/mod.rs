//! Ultimate engine invocation.
//!
//! The engine is expected on `PATH` as `Ultimate` (overridable via the
//! `ULTIMATE_BIN` environment variable). It emits zero or more informational
//! log lines on stdout followed by one final line of JSON carrying a
//! `frontend_settings` array; everything before that last line is discarded.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};

use serde_json::Value;

use crate::error::SettingsError;
use crate::settings::SettingEntry;

/// Environment variable overriding the engine binary location.
pub const ENGINE_ENV: &str = "ULTIMATE_BIN";

/// Engine binary name looked up on `PATH` when no override is set.
pub const DEFAULT_ENGINE: &str = "Ultimate";

/// Key in the engine's JSON output holding the settings array.
pub const FRONTEND_SETTINGS_KEY: &str = "frontend_settings";

/// Handle to the Ultimate engine binary.
#[derive(Debug, Clone)]
pub struct Engine {
    program: OsString,
}

impl Engine {
    /// Resolve the engine from `ULTIMATE_BIN`, falling back to `Ultimate`
    /// on `PATH`.
    pub fn from_env() -> Self {
        let program = std::env::var_os(ENGINE_ENV)
            .unwrap_or_else(|| OsString::from(DEFAULT_ENGINE));
        Self { program }
    }

    /// Use an explicit engine binary.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Query the engine for the built-in default settings of `toolchain`.
    pub fn query_defaults(&self, toolchain: &Path) -> Result<Vec<SettingEntry>, SettingsError> {
        self.query(&[
            OsStr::new("-tc"),
            toolchain.as_os_str(),
            OsStr::new("--generate-frontend-json-from-defaults"),
        ])
    }

    /// Query the engine for the delta between defaults and `settings`.
    ///
    /// The engine requires an input file even for this query, hence the
    /// `-i dummy` placeholder.
    pub fn query_delta(
        &self,
        toolchain: &Path,
        settings: &Path,
    ) -> Result<Vec<SettingEntry>, SettingsError> {
        self.query(&[
            OsStr::new("-tc"),
            toolchain.as_os_str(),
            OsStr::new("-s"),
            settings.as_os_str(),
            OsStr::new("-i"),
            OsStr::new("dummy"),
            OsStr::new("--generate-frontend-json-from-delta"),
        ])
    }

    fn query(&self, args: &[&OsStr]) -> Result<Vec<SettingEntry>, SettingsError> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| SettingsError::EngineSpawn {
                program: self.program_name(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(SettingsError::EngineFailed {
                program: self.program_name(),
                status: output.status,
            });
        }

        parse_frontend_settings(&output.stdout, &self.program_name())
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// Extract the `frontend_settings` array from raw engine stdout.
///
/// Takes the last stdout line, parses it as JSON, and pulls out the array.
/// Preceding lines are ordinary log output and ignored.
pub fn parse_frontend_settings(
    stdout: &[u8],
    program: &str,
) -> Result<Vec<SettingEntry>, SettingsError> {
    let text = String::from_utf8_lossy(stdout);
    let last_line = text
        .lines()
        .last()
        .ok_or_else(|| SettingsError::EmptyEngineOutput {
            program: program.to_string(),
        })?;

    let value: Value = serde_json::from_str(last_line)
        .map_err(|e| SettingsError::MalformedEngineOutput { source: e })?;

    let entries = value
        .get(FRONTEND_SETTINGS_KEY)
        .ok_or(SettingsError::MissingFrontendSettings {
            key: FRONTEND_SETTINGS_KEY,
        })?;

    serde_json::from_value(entries.clone())
        .map_err(|e| SettingsError::MalformedEntry { source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_log_lines() {
        let stdout = b"INFO: loading toolchain\nINFO: 42 plugins\n{\"frontend_settings\": [{\"id\": \"A\", \"value\": 1}]}";

        let entries = parse_frontend_settings(stdout, "Ultimate").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "A");
    }

    #[test]
    fn test_parse_bare_json_line() {
        let stdout = b"{\"frontend_settings\": []}\n";

        let entries = parse_frontend_settings(stdout, "Ultimate").unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_output_is_an_error() {
        let err = parse_frontend_settings(b"", "Ultimate").unwrap_err();
        assert!(matches!(err, SettingsError::EmptyEngineOutput { .. }));
    }

    #[test]
    fn test_garbage_last_line_is_an_error() {
        let stdout = b"{\"frontend_settings\": []}\nshutting down";

        let err = parse_frontend_settings(stdout, "Ultimate").unwrap_err();

        assert!(matches!(err, SettingsError::MalformedEngineOutput { .. }));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = parse_frontend_settings(b"{\"results\": []}", "Ultimate").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::MissingFrontendSettings { .. }
        ));
    }

    #[test]
    fn test_entry_without_id_is_an_error() {
        let stdout = b"{\"frontend_settings\": [{\"value\": 1}]}";

        let err = parse_frontend_settings(stdout, "Ultimate").unwrap_err();

        assert!(matches!(err, SettingsError::MalformedEntry { .. }));
    }

    #[test]
    fn test_spawn_failure_on_missing_binary() {
        let engine = Engine::with_program("/nonexistent/ultimate-binary");

        let err = engine.query_defaults(Path::new("toolchain.xml")).unwrap_err();

        assert!(matches!(err, SettingsError::EngineSpawn { .. }));
    }
}
