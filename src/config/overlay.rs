use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the `roi_overlay` tool.
#[derive(Debug, Deserialize)]
pub struct OverlayToolConfig {
    /// One SOAX `.txt` export to convert.
    #[serde(rename = "log_file")]
    pub log_file: PathBuf,
    /// ROI coordinate JSON (`{file_key: {roi_name: [[x, y], ...]}}`).
    #[serde(rename = "roi_json")]
    pub roi_json: PathBuf,
    /// Which annotated image in the archive to compare against.
    #[serde(rename = "file_key")]
    pub file_key: String,
    #[serde(rename = "output_png")]
    pub output_png: PathBuf,
}

pub fn load_config(path: &Path) -> Result<OverlayToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
