//! Math utility functions.
//!
//! Distance from a pixel to a light center, plus the clamping and
//! rounding used when writing blended channels back to 8 bits.

use crate::lighting::light::Light;

/// Euclidean distance from `(px, py)` to the light's center.
#[inline(always)]
pub fn light_distance(px: f64, py: f64, light: &Light) -> f64 {
    let dx = px - light.x();
    let dy = py - light.y();
    (dx * dx + dy * dy).sqrt()
}

/// Clamp f32 to [min, max].
#[inline(always)]
pub fn clampf(v: f32, min: f32, max: f32) -> f32 {
    if v < min { min } else if v > max { max } else { v }
}

/// Clamp to [0, 255] and round half up to a byte.
///
/// NaN collapses to 0.
#[inline(always)]
pub fn channel_to_byte(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (clampf(v, 0.0, 255.0) + 0.5).floor() as u8
}

/// Clamp and round an arbitrary float color component to a byte.
#[inline(always)]
pub fn component_to_byte(v: f64) -> u8 {
    channel_to_byte(v as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Rgb;

    #[test]
    fn test_light_distance() {
        let l = Light::new(3.0, 4.0, 10.0, Rgb::WHITE, 0.0);
        assert!((light_distance(0.0, 0.0, &l) - 5.0).abs() < 1e-10);
        assert!((light_distance(3.0, 4.0, &l) - 0.0).abs() < 1e-10);
        assert!((light_distance(6.0, 8.0, &l) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_clampf() {
        assert_eq!(clampf(300.0, 0.0, 255.0), 255.0);
        assert_eq!(clampf(-4.0, 0.0, 255.0), 0.0);
        assert_eq!(clampf(12.5, 0.0, 255.0), 12.5);
    }

    #[test]
    fn test_channel_to_byte_rounds_half_up() {
        assert_eq!(channel_to_byte(12.5), 13);
        assert_eq!(channel_to_byte(12.49), 12);
        assert_eq!(channel_to_byte(254.6), 255);
    }

    #[test]
    fn test_channel_to_byte_clamps() {
        assert_eq!(channel_to_byte(1e9), 255);
        assert_eq!(channel_to_byte(-1e9), 0);
        assert_eq!(channel_to_byte(f32::NAN), 0);
        assert_eq!(channel_to_byte(f32::INFINITY), 255);
    }
}
