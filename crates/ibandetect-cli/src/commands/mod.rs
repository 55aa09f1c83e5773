//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod extract;
pub mod scan;

use std::path::Path;

use ibandetect_core::DetectConfig;

/// Load the pipeline configuration, falling back to defaults when no file
/// is given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DetectConfig> {
    match config_path {
        Some(path) => Ok(DetectConfig::from_file(Path::new(path))?),
        None => Ok(DetectConfig::default()),
    }
}

/// Output format shared by the scan and batch commands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}
