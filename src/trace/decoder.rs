use super::record::FilamentRecord;
use super::tokenizer::{Segment, MARKER};
use crate::error::ConvertError;
use std::path::Path;

/// Required leading columns of a data line: `s p x y`.
const REQUIRED_COLUMNS: usize = 4;

/// Decode the data lines of one segment into ordered records.
///
/// Lines containing the marker delimiter are skipped (guards against stray
/// marker-like content inside a data block), as are blank lines. Everything
/// else must parse: fewer than four columns or a non-numeric token anywhere
/// aborts with a format error citing the 1-based physical line number.
pub fn decode_segment(
    lines: &[String],
    segment: Segment,
    path: &Path,
) -> Result<Vec<FilamentRecord>, ConvertError> {
    let mut records = Vec::new();
    for (offset, line) in lines[segment.start..segment.end].iter().enumerate() {
        if line.contains(MARKER) {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let lineno = segment.start + offset + 1;
        records.push(decode_line(&tokens, lineno, path)?);
    }
    Ok(records)
}

fn decode_line(
    tokens: &[&str],
    lineno: usize,
    path: &Path,
) -> Result<FilamentRecord, ConvertError> {
    if tokens.len() < REQUIRED_COLUMNS {
        return Err(format_error(path, lineno, &tokens.join(" ")));
    }
    // `nan`/`inf` parse as f64 but would defeat the rasterizer's bounds
    // check (the float-to-int cast saturates), so they are malformed here.
    let numeric = |token: &str| -> Result<f64, ConvertError> {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(format_error(path, lineno, token)),
        }
    };
    let s = numeric(tokens[0])?;
    let p = numeric(tokens[1])? as i64;
    let x = numeric(tokens[2])?;
    let y = numeric(tokens[3])?;
    let z = tokens.get(4).map(|t| numeric(t)).transpose()?;
    let fg_intensity = tokens.get(5).map(|t| numeric(t)).transpose()?;
    let bg_intensity = tokens.get(6).map(|t| numeric(t)).transpose()?;
    Ok(FilamentRecord {
        s,
        p,
        x,
        y,
        z,
        fg_intensity,
        bg_intensity,
    })
}

fn format_error(path: &Path, lineno: usize, token: &str) -> ConvertError {
    ConvertError::Format {
        path: path.to_path_buf(),
        line: lineno,
        token: token.to_string(),
    }
}
