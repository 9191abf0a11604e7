//! SOAX log parsing: marker-delimited segmentation and record decoding.
//!
//! A SOAX export is a plain ASCII file. Lines containing the reserved `#`
//! delimiter open segments; each segment holds the whitespace-separated
//! numeric samples of one traced filament in the fixed column order
//! `s p x y z fg_intensity bg_intensity` (trailing columns optional).
//!
//! Parsing happens in two passes:
//!
//! - [`segment_ranges`] scans for marker lines and derives `[start, end)`
//!   line ranges, one per filament. A file with zero markers produces zero
//!   ranges, which is a valid (empty) trace, not a failure.
//! - [`decode_segment`] turns one range into ordered [`FilamentRecord`]s,
//!   skipping marker-like and blank lines and failing fast on any
//!   non-numeric or short data line.
//!
//! Filament identity is the 1-based decode-order position of its segment.
//! The id token embedded in each record is *not* trusted: exports have been
//! observed where it disagrees with the segment's position, and downstream
//! reference images were produced with positional identity.

mod decoder;
mod record;
mod tokenizer;

pub use decoder::decode_segment;
pub use record::{Filament, FilamentRecord};
pub use tokenizer::{marker_lines, segment_ranges, Segment, MARKER};

use crate::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};

/// An in-memory SOAX log: ordered physical lines plus their source path.
/// Read-only once loaded.
#[derive(Clone, Debug)]
pub struct RawLogFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl RawLogFile {
    /// Read a log from disk.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let text = fs::read_to_string(path).map_err(|e| ConvertError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_text(path, &text))
    }

    /// Build a log from already-loaded text. The path is kept for error
    /// context only.
    pub fn from_text(path: &Path, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Decode every segment of a log into filaments, assigning 1-based indices
/// in decode order.
///
/// Fails fast: the first malformed line aborts the whole log and any
/// partially decoded filaments are discarded.
pub fn decode_log(log: &RawLogFile) -> Result<Vec<Filament>, ConvertError> {
    let ranges = segment_ranges(log.lines());
    let mut filaments = Vec::with_capacity(ranges.len());
    for (pos, segment) in ranges.into_iter().enumerate() {
        let records = decode_segment(log.lines(), segment, log.path())?;
        filaments.push(Filament {
            index: pos + 1,
            records,
        });
    }
    Ok(filaments)
}
