//! ROI ground-truth collaborator.
//!
//! The annotation workflow extracts ImageJ ROI zips into a coordinate JSON
//! of the shape `{file_key: {roi_name: [[x, y], ...]}}`. This module reads
//! that JSON, rasterizes ROI polylines onto the same 512×512 canvas the
//! trace pipeline uses, and computes trace/ROI overlap. Rendering beyond the
//! `roi_overlay` tool's RGB dump is out of scope.

use crate::image::{OccupancyImage, CANVAS_SIZE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// ROI polylines for one annotated image: roi name → ordered vertices.
pub type RoiSet = BTreeMap<String, Vec<(f64, f64)>>;

/// Whole annotation archive: file key → ROI set.
pub type RoiArchive = BTreeMap<String, RoiSet>;

/// Read an ROI coordinate JSON file.
pub fn read_roi_json(path: &Path) -> Result<RoiArchive, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read ROI JSON {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse ROI JSON {}: {e}", path.display()))
}

/// Rasterize one ROI set onto a fresh canvas.
///
/// Every vertex is marked, and consecutive vertices are connected with
/// straight line segments. Annotations may touch or cross the canvas border;
/// unlike trace points, out-of-canvas ROI cells are dropped silently since
/// only the on-canvas portion can overlap a trace.
pub fn rasterize_rois(rois: &RoiSet) -> OccupancyImage {
    let mut mask = OccupancyImage::new();
    for vertices in rois.values() {
        match vertices.as_slice() {
            [] => {}
            [single] => mark_clipped(&mut mask, single.0, single.1),
            many => {
                for pair in many.windows(2) {
                    draw_line(&mut mask, pair[0], pair[1]);
                }
            }
        }
    }
    mask
}

/// Cell counts comparing a trace image against an ROI mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Overlap {
    /// Cells occupied in both images.
    pub both: usize,
    /// Cells occupied only in the trace.
    pub trace_only: usize,
    /// Cells occupied only in the ROI mask.
    pub roi_only: usize,
}

impl Overlap {
    /// Intersection over union; 0 when both images are empty.
    pub fn jaccard(&self) -> f64 {
        let union = self.both + self.trace_only + self.roi_only;
        if union == 0 {
            0.0
        } else {
            self.both as f64 / union as f64
        }
    }
}

/// Count overlap cells between a trace image and an ROI mask.
pub fn overlap(trace: &OccupancyImage, mask: &OccupancyImage) -> Overlap {
    let mut counts = Overlap::default();
    for (&t, &m) in trace.as_slice().iter().zip(mask.as_slice()) {
        match (t, m) {
            (1, 1) => counts.both += 1,
            (1, _) => counts.trace_only += 1,
            (_, 1) => counts.roi_only += 1,
            _ => {}
        }
    }
    counts
}

fn mark_clipped(mask: &mut OccupancyImage, x: f64, y: f64) {
    let (xi, yi) = (x.round() as i64, y.round() as i64);
    let range = 0..CANVAS_SIZE as i64;
    if range.contains(&xi) && range.contains(&yi) {
        mask.mark(xi as usize, yi as usize);
    }
}

/// Bresenham line between two vertices, endpoints included.
fn draw_line(mask: &mut OccupancyImage, from: (f64, f64), to: (f64, f64)) {
    let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
    let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        mark_clipped(mask, x0 as f64, y0 as f64);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
