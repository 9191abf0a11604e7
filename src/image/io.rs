//! I/O helpers for occupancy images and JSON.
//!
//! - `save_occupancy_png`: write an `OccupancyImage` to a grayscale PNG
//!   (occupied cells white).
//! - `save_overlay_rgb`: write a trace/ROI comparison to an RGB PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{OccupancyImage, CANVAS_SIZE};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save an occupancy image to a grayscale PNG, occupied cells at 255.
///
/// Grid row `x` maps to image row `x`, so the PNG matches the exporter's
/// `image[x][y]` orientation when viewed top-down.
pub fn save_occupancy_png(image: &OccupancyImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(CANVAS_SIZE as u32, CANVAS_SIZE as u32);
    for x in 0..CANVAS_SIZE {
        for (y, &cell) in image.row(x).iter().enumerate() {
            let v = if cell == 1 { 255u8 } else { 0u8 };
            out.put_pixel(y as u32, x as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a trace/ROI comparison to an RGB PNG: trace-only cells red, ROI-only
/// cells green, cells occupied in both yellow.
pub fn save_overlay_rgb(
    trace: &OccupancyImage,
    roi_mask: &OccupancyImage,
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(CANVAS_SIZE as u32, CANVAS_SIZE as u32);
    for x in 0..CANVAS_SIZE {
        for y in 0..CANVAS_SIZE {
            let px = match (trace.get(x, y), roi_mask.get(x, y)) {
                (1, 1) => Rgb([255, 255, 0]),
                (1, _) => Rgb([255, 0, 0]),
                (_, 1) => Rgb([0, 255, 0]),
                _ => Rgb([0, 0, 0]),
            };
            out.put_pixel(y as u32, x as u32, px);
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
