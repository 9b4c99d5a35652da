//! Lighting module: stylized point light accumulation over a raster.
//!
//! - `light`: the light entity and its flat parameter layout
//! - `falloff`: per-light cone modifier state, driven by scan order
//! - `apply`: the in-place and copy-producing lighting passes

pub mod apply;
pub mod falloff;
pub mod light;
