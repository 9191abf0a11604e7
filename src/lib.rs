#![doc = include_str!("../README.md")]

// Core pipeline (stable-ish surface)
pub mod convert;
pub mod error;
pub mod image;
pub mod orient;
pub mod raster;
pub mod trace;

// Collaborators around the pipeline.
pub mod batch;
pub mod catalog;
pub mod config;
pub mod roi;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points: per-file and batch conversion.
pub use crate::batch::{convert_batch, BatchResult};
pub use crate::convert::{convert_log, log_to_image};
pub use crate::error::ConvertError;
pub use crate::image::{OccupancyImage, CANVAS_SIZE};

// Input-selection collaborator.
pub use crate::catalog::{Catalog, SourceKey};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use soax_raster::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), ConvertError> {
/// let image = log_to_image(Path::new("AB (11) g--ridge0.03000--stretch0.7000.txt"))?;
/// println!("occupied cells: {}", image.count_ones());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::convert::log_to_image;
    pub use crate::error::ConvertError;
    pub use crate::image::{OccupancyImage, CANVAS_SIZE};
}
