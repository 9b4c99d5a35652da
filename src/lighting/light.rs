//! Point light entity.
//!
//! A light is a colored disc: center, radius, additive color and a
//! brightness that drives the cone falloff in `apply`. It also carries a
//! cached `Extent`, kept in sync by every position/radius setter.

use std::fmt;

use crate::engine::types::{Extent, Rgb};
use crate::math::utils;

/// Number of `f64` slots per light in a parameter buffer.
pub const LIGHT_RECORD_LEN: usize = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    x: f64,
    y: f64,
    radius: f64,
    color: Rgb,
    brightness: f32,
    extent: Extent,
}

impl Light {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, brightness: f32) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            brightness,
            extent: Extent::for_light(x, y, radius),
        }
    }

    /// Center x.
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
        self.update_extent();
    }

    /// Center y.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
        self.update_extent();
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.update_extent();
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Per-pixel step applied to the cone modifier.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    /// Cached bounding shape for geometry queries. The lighting pass
    /// computes its own, wider, scan box and never reads this.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    fn update_extent(&mut self) {
        self.extent = Extent::for_light(self.x, self.y, self.radius);
    }

    /// Append this light as one parameter record:
    /// `[x, y, radius, r, g, b, brightness]`.
    pub fn to_buffer(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[
            self.x,
            self.y,
            self.radius,
            self.color.r as f64,
            self.color.g as f64,
            self.color.b as f64,
            self.brightness as f64,
        ]);
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}, r: {}, color: {}", self.x, self.y, self.radius, self.color)
    }
}

/// Build the light list from a flat f64 parameter array.
/// Layout: [num_lights,
///   for each light: [x, y, radius, color_r, color_g, color_b, brightness]]
///
/// Color components are clamped to [0, 255] and rounded. A truncated
/// trailing record is dropped.
pub fn lights_from_buffer(data: &[f64]) -> Vec<Light> {
    let Some((&count, records)) = data.split_first() else {
        return Vec::new();
    };
    // NaN and negative counts saturate to 0
    let num_lights = count as usize;

    records
        .chunks_exact(LIGHT_RECORD_LEN)
        .take(num_lights)
        .map(|rec| {
            let color = Rgb::new(
                utils::component_to_byte(rec[3]),
                utils::component_to_byte(rec[4]),
                utils::component_to_byte(rec[5]),
            );
            Light::new(rec[0], rec[1], rec[2], color, rec[6] as f32)
        })
        .collect()
}

/// Encode lights into the layout read by `lights_from_buffer`.
pub fn lights_to_buffer(lights: &[Light]) -> Vec<f64> {
    let mut out = Vec::with_capacity(1 + lights.len() * LIGHT_RECORD_LEN);
    out.push(lights.len() as f64);
    for light in lights {
        light.to_buffer(&mut out);
    }
    out
}
