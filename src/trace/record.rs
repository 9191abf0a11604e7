use serde::Serialize;

/// One decoded sample point of a filament trace.
///
/// Column order in the log is `s p x y z fg_intensity bg_intensity`; the
/// first four columns are required, the rest are decoded when present.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FilamentRecord {
    /// Arc-length parameter along the filament.
    pub s: f64,
    /// Point index as written by the tracer.
    pub p: i64,
    /// Grid row coordinate (rounded at rasterization time).
    pub x: f64,
    /// Grid column coordinate (rounded at rasterization time).
    pub y: f64,
    pub z: Option<f64>,
    pub fg_intensity: Option<f64>,
    pub bg_intensity: Option<f64>,
}

/// One traced filament: ordered samples plus its 1-based decode-order index.
///
/// The index comes from the position of the filament's segment among the
/// decoded segments, never from the `s` token embedded in its records.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Filament {
    pub index: usize,
    pub records: Vec<FilamentRecord>,
}

impl Filament {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty filament is valid and contributes no occupied cells.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
