//! Image and color primitives the lighting engine operates on.

pub mod image;
pub mod types;
