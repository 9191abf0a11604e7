pub mod io;
pub mod occupancy;

pub use self::occupancy::{OccupancyImage, CANVAS_SIZE};
