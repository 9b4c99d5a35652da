//! Numeric helpers for the lighting pass.

pub mod utils;
