//! Occupancy rasterization of decoded filaments.
//!
//! Cells record presence, not hit counts: any number of records landing in
//! the same cell leaves it at exactly 1. A coordinate outside the canvas is
//! corruption as far as downstream spatial comparison is concerned, so it
//! aborts the conversion instead of being clipped or wrapped.

use crate::error::{Axis, ConvertError};
use crate::image::{OccupancyImage, CANVAS_SIZE};
use crate::trace::Filament;
use std::path::Path;

/// Rasterize filaments onto a fresh zero-filled canvas.
///
/// Each record's `x` and `y` are rounded to the nearest integer and the cell
/// `image[x][y]` is marked. The first out-of-canvas coordinate fails the
/// whole rasterization, naming the filament and the offending value.
pub fn rasterize(filaments: &[Filament], path: &Path) -> Result<OccupancyImage, ConvertError> {
    let mut image = OccupancyImage::new();
    for filament in filaments {
        for record in &filament.records {
            let x = checked_coord(record.x, Axis::X, filament.index, path)?;
            let y = checked_coord(record.y, Axis::Y, filament.index, path)?;
            image.mark(x, y);
        }
    }
    Ok(image)
}

fn checked_coord(
    value: f64,
    axis: Axis,
    filament: usize,
    path: &Path,
) -> Result<usize, ConvertError> {
    let coord = value.round() as i64;
    if !(0..CANVAS_SIZE as i64).contains(&coord) {
        return Err(ConvertError::OutOfBounds {
            path: path.to_path_buf(),
            filament,
            axis,
            coord,
        });
    }
    Ok(coord as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::FilamentRecord;

    fn record(x: f64, y: f64) -> FilamentRecord {
        FilamentRecord {
            s: 0.0,
            p: 0,
            x,
            y,
            z: None,
            fg_intensity: None,
            bg_intensity: None,
        }
    }

    fn filament(index: usize, points: &[(f64, f64)]) -> Filament {
        Filament {
            index,
            records: points.iter().map(|&(x, y)| record(x, y)).collect(),
        }
    }

    #[test]
    fn repeated_hits_collapse_to_occupancy() {
        let filaments = vec![
            filament(1, &[(10.0, 20.0), (10.2, 19.8)]),
            filament(2, &[(10.0, 20.0)]),
        ];
        let image = rasterize(&filaments, Path::new("a.txt")).unwrap();
        assert_eq!(image.get(10, 20), 1);
        assert_eq!(image.count_ones(), 1);
    }

    #[test]
    fn coordinates_round_to_nearest_cell() {
        let filaments = vec![filament(1, &[(10.6, 20.4)])];
        let image = rasterize(&filaments, Path::new("a.txt")).unwrap();
        assert_eq!(image.get(11, 20), 1);
    }

    #[test]
    fn x_at_canvas_size_is_out_of_bounds() {
        let filaments = vec![filament(1, &[(512.0, 0.0)])];
        let err = rasterize(&filaments, Path::new("a.txt")).unwrap_err();
        assert_eq!(
            err,
            ConvertError::OutOfBounds {
                path: "a.txt".into(),
                filament: 1,
                axis: Axis::X,
                coord: 512,
            }
        );
    }

    #[test]
    fn negative_y_is_out_of_bounds() {
        let filaments = vec![filament(3, &[(0.0, -1.0)])];
        let err = rasterize(&filaments, Path::new("a.txt")).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::OutOfBounds {
                filament: 3,
                axis: Axis::Y,
                coord: -1,
                ..
            }
        ));
    }

    #[test]
    fn empty_filaments_leave_the_canvas_untouched() {
        let filaments = vec![filament(1, &[])];
        let image = rasterize(&filaments, Path::new("a.txt")).unwrap();
        assert_eq!(image.count_ones(), 0);
    }
}
