//! Straight-line per-file conversion pipeline.
//!
//! Tokenize → decode → rasterize → reorient, with fail-fast abort on the
//! first stage error. The result is a pure function of the file's bytes:
//! the same bytes always produce the identical image.

use crate::error::ConvertError;
use crate::image::OccupancyImage;
use crate::trace::{self, RawLogFile};
use crate::{orient, raster};
use log::debug;

use std::path::Path;

/// Convert one SOAX log file into a re-oriented occupancy image.
pub fn log_to_image(path: &Path) -> Result<OccupancyImage, ConvertError> {
    let log = RawLogFile::load(path)?;
    convert_log(&log)
}

/// Convert an already-loaded log. Exposed for in-memory callers and tests.
pub fn convert_log(log: &RawLogFile) -> Result<OccupancyImage, ConvertError> {
    let filaments = trace::decode_log(log)?;
    debug!(
        "{}: decoded {} filaments ({} points)",
        log.path().display(),
        filaments.len(),
        filaments.iter().map(|f| f.len()).sum::<usize>()
    );
    let image = raster::rasterize(&filaments, log.path())?;
    Ok(orient::reorient(&image))
}
