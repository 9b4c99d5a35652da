//! Lighting pass: accumulates point lights into a pixel grid.
//!
//! Lights are applied one after another, each on top of the image left by
//! the previous one. For every light the pass scans a `2r × 2r` box around
//! the center (x outer, y inner, both ascending), skips pixels farther than
//! `r` from the center, steps the light's `ConeFalloff`, and blends:
//!
//! ```text
//! c' = round(clamp((c + light_c) * modifier, 0, 255))
//! ```

use crate::engine::image::PixelGrid;
use crate::engine::types::Rgb;
use crate::math::utils;

use super::falloff::ConeFalloff;
use super::light::Light;

/// Half-open pixel range `[start, end)` on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSpan {
    pub start: i64,
    pub end: i64,
}

impl ScanSpan {
    /// `[trunc(center) - trunc(radius), trunc(center) + trunc(radius))`,
    /// clipped to `[0, limit)`.
    pub fn around(center: f64, radius: f64, limit: u32) -> Self {
        let c = center as i64;
        let r = radius as i64;
        Self {
            start: c.saturating_sub(r).max(0),
            end: c.saturating_add(r).min(limit as i64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Apply `lights` in order, mutating `image` in place.
///
/// Returns the same image so calls can be chained.
pub fn apply_lights<'a, I: PixelGrid>(image: &'a mut I, lights: &[Light]) -> &'a mut I {
    for light in lights {
        apply_light(image, light);
    }
    image
}

/// Apply `lights` to a copy of `image`, leaving the input untouched.
pub fn apply_lights_to_copy<I: PixelGrid + Clone>(image: &I, lights: &[Light]) -> I {
    let mut out = image.clone();
    apply_lights(&mut out, lights);
    out
}

/// One light's pass over `image`. Returns the number of pixels written.
pub fn apply_light<I: PixelGrid>(image: &mut I, light: &Light) -> u32 {
    let xs = ScanSpan::around(light.x(), light.radius(), image.width());
    let ys = ScanSpan::around(light.y(), light.radius(), image.height());
    if xs.is_empty() || ys.is_empty() {
        return 0;
    }

    let mut state = ConeFalloff::new();
    let mut written = 0;

    for x in xs.start..xs.end {
        for y in ys.start..ys.end {
            if light_pixel(image, light, &mut state, x as u32, y as u32) {
                written += 1;
            }
        }
    }

    written
}

/// Process one pixel of a light's scan. Out-of-radius pixels are left
/// alone and do not advance `state`.
///
/// Returns whether the pixel was written.
pub fn light_pixel<I: PixelGrid>(
    image: &mut I,
    light: &Light,
    state: &mut ConeFalloff,
    x: u32,
    y: u32,
) -> bool {
    let (px, py) = (x as f64, y as f64);
    let dist = utils::light_distance(px, py, light);
    // NaN distances fall through here as well
    if !(dist <= light.radius()) {
        return false;
    }

    let modifier = state.enter(py, light.y(), dist, light.brightness());
    let lit = blend(image.get_pixel(x, y), light.color(), modifier);
    image.set_pixel(x, y, lit);
    state.leave(py, light.y(), dist);

    true
}

/// Add `light` to `base`, scale by `modifier`, clamp and round per channel.
#[inline]
pub fn blend(base: Rgb, light: Rgb, modifier: f32) -> Rgb {
    let [br, bg, bb] = base.channels_f32();
    let [lr, lg, lb] = light.channels_f32();
    Rgb::new(
        utils::channel_to_byte((br + lr) * modifier),
        utils::channel_to_byte((bg + lg) * modifier),
        utils::channel_to_byte((bb + lb) * modifier),
    )
}
