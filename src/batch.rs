//! Batch conversion across many log files.
//!
//! Conversions share no state, so a batch is embarrassingly parallel: with
//! the `parallel` feature (default) files are converted on the rayon pool,
//! otherwise sequentially. Results are keyed by source path; completion
//! order is irrelevant and per-file failures are carried in the map so the
//! caller can choose between skip-and-continue and abort-all.

use crate::convert::log_to_image;
use crate::error::ConvertError;
use crate::image::OccupancyImage;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Per-file conversion outcomes keyed by source path.
pub type BatchResult = BTreeMap<PathBuf, Result<OccupancyImage, ConvertError>>;

#[cfg(feature = "parallel")]
pub fn convert_batch(paths: &[PathBuf]) -> BatchResult {
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|path| (path.clone(), log_to_image(path)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn convert_batch(paths: &[PathBuf]) -> BatchResult {
    paths
        .iter()
        .map(|path| (path.clone(), log_to_image(path)))
        .collect()
}

/// Split a batch result into successful images and failures.
pub fn partition(results: BatchResult) -> (BTreeMap<PathBuf, OccupancyImage>, Vec<ConvertError>) {
    let mut images = BTreeMap::new();
    let mut failures = Vec::new();
    for (path, outcome) in results {
        match outcome {
            Ok(image) => {
                images.insert(path, image);
            }
            Err(err) => failures.push(err),
        }
    }
    (images, failures)
}
