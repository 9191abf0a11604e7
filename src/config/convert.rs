use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `soax_to_image` tool.
#[derive(Debug, Deserialize)]
pub struct ConvertToolConfig {
    /// Directory tree holding SOAX `.txt` exports.
    #[serde(rename = "input_dir")]
    pub input_dir: PathBuf,
    /// Where PNGs and the summary JSON are written.
    #[serde(rename = "output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

/// What to do when a single file fails to convert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Convert the rest and report failures in the summary.
    #[default]
    SkipAndContinue,
    /// Stop at the first failure.
    AbortAll,
}

pub fn load_config(path: &Path) -> Result<ConvertToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
