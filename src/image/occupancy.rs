//! Owned fixed-size binary occupancy grid in row-major layout.
//!
//! Cells carry presence, not counts: a cell is 1 when at least one traced
//! point fell into it, 0 otherwise. Coordinates follow the exporter's
//! `image[x][y]` convention, so `x` indexes rows and `y` indexes columns.

/// Canvas edge length, shared by grid allocation and the rasterizer's
/// bounds check.
pub const CANVAS_SIZE: usize = 512;

/// Fixed `CANVAS_SIZE × CANVAS_SIZE` binary occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyImage {
    data: Vec<u8>,
}

impl OccupancyImage {
    /// Construct a zero-filled canvas.
    pub fn new() -> Self {
        Self {
            data: vec![0; CANVAS_SIZE * CANVAS_SIZE],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into the backing storage.
    fn idx(x: usize, y: usize) -> usize {
        x * CANVAS_SIZE + y
    }

    #[inline]
    /// Get the occupancy flag at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[Self::idx(x, y)]
    }

    #[inline]
    /// Mark the cell at (x, y) as occupied. Idempotent.
    pub fn mark(&mut self, x: usize, y: usize) {
        self.data[Self::idx(x, y)] = 1;
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// Coordinates of every occupied cell in row-major order.
    pub fn occupied(&self) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(|(i, _)| (i / CANVAS_SIZE, i % CANVAS_SIZE))
            .collect()
    }

    /// Row `x` as a contiguous slice of `CANVAS_SIZE` flags.
    #[inline]
    pub fn row(&self, x: usize) -> &[u8] {
        let start = x * CANVAS_SIZE;
        &self.data[start..start + CANVAS_SIZE]
    }

    /// Backing storage in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for OccupancyImage {
    fn default() -> Self {
        Self::new()
    }
}
