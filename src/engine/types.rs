//! Core value types shared by the image adapters and the lighting pass.
//!
//! `Rgb` is the 8-bit color primitive the engine reads and writes, with
//! conversion to and from packed `0xAARRGGBB` integers. `Extent` is the
//! cached bounding shape a light carries for external geometry queries.

use std::fmt;

/// 8-bit RGB color. No alpha: writes through the engine are always opaque.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from `0xAARRGGBB`. The alpha byte is ignored.
    #[inline(always)]
    pub const fn from_packed(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Pack to `0xAARRGGBB` with alpha forced to 0xFF.
    #[inline(always)]
    pub const fn to_packed(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Channels as floats, in red, green, blue order.
    #[inline(always)]
    pub fn channels_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Axis-aligned bounding rectangle of an ellipse.
///
/// Derived from a light's position and radius: top-left at
/// `(x - r/2, y - r/2)`, `r/2` on each side. This is narrower than the
/// `2r` box the lighting pass scans.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Extent {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn for_light(x: f64, y: f64, r: f64) -> Self {
        let half = r / 2.0;
        Self { x: x - half, y: y - half, width: half, height: half }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `(px, py)` lies strictly inside the inscribed ellipse.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let nx = (px - self.x) / self.width - 0.5;
        let ny = (py - self.y) / self.height - 0.5;
        nx * nx + ny * ny < 0.25
    }
}
