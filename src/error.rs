//! Error taxonomy for the log-to-image conversion.
//!
//! A log with zero marker lines is deliberately *not* an error: it decodes to
//! zero filaments and yields an all-zero canvas. Everything here aborts the
//! conversion of its file atomically; no partial image is ever returned.

use crate::image::CANVAS_SIZE;
use std::fmt;
use std::path::PathBuf;

/// Coordinate axis named in an out-of-bounds report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Reasons why a single log-file conversion may fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvertError {
    /// A data line held a non-numeric token in a required column, or fewer
    /// than the four required columns.
    Format {
        path: PathBuf,
        /// 1-based physical line number in the source file.
        line: usize,
        token: String,
    },
    /// A decoded coordinate fell outside the canvas.
    OutOfBounds {
        path: PathBuf,
        /// 1-based sequential filament index in decode order.
        filament: usize,
        axis: Axis,
        coord: i64,
    },
    /// The source file could not be read.
    Io { path: PathBuf, message: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Format { path, line, token } => write!(
                f,
                "{}:{}: expected numeric data columns, got {:?}",
                path.display(),
                line,
                token
            ),
            ConvertError::OutOfBounds {
                path,
                filament,
                axis,
                coord,
            } => write!(
                f,
                "{}: filament {}: {} coordinate {} outside [0, {})",
                path.display(),
                filament,
                axis,
                coord,
                CANVAS_SIZE
            ),
            ConvertError::Io { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
