//! build-settings CLI
//!
//! Entry point for the `build-settings` command-line tool. The Ultimate
//! engine binary must be on PATH (or named via `ULTIMATE_BIN`).

use clap::Parser;
use frontend_settings::{Engine, PipelineConfig, SettingsError};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "build-settings")]
#[command(about = "Construct the JSON configuration for the Ultimate web interface", version)]
struct Cli {
    /// The .epf settings file used as basis for the configuration
    #[arg(short = 's', long = "settings", value_name = "settings")]
    settings: PathBuf,

    /// The toolchain for which the configuration shall be generated
    #[arg(short = 't', long = "toolchain", alias = "tc", value_name = "toolchain")]
    toolchain: PathBuf,

    /// A JSON file that overrides metadata for some configuration options;
    /// an array of objects, each containing at least an "id" key
    #[arg(long = "override", value_name = "override")]
    override_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    require_file(&cli.settings);
    require_file(&cli.toolchain);
    if let Some(ref path) = cli.override_file {
        require_file(path);
    }

    let config = PipelineConfig {
        settings: cli.settings,
        toolchain: cli.toolchain,
        override_file: cli.override_file,
    };
    let engine = Engine::from_env();

    match frontend_settings::run(&engine, &config) {
        Ok(json) => println!("{}", json),
        Err(SettingsError::UnknownOverrideId { id, known }) => {
            eprintln!("ERROR: Could not find setting with ID {}. Exiting...", id);
            eprintln!("Known default IDs: {}", known.join(", "));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn require_file(path: &Path) {
    if !path.is_file() {
        eprintln!("{} is not a file", path.display());
        process::exit(1);
    }
}
