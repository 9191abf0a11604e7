//! JSON configuration loaders for the bundled tools.

pub mod convert;
pub mod overlay;
