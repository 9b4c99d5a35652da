use wasm_bindgen::prelude::*;

/// Log to the browser console. Compiles to nothing off wasm32, but the
/// format arguments are still type-checked.
macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($t)*);
    }};
}

pub mod engine;
pub mod lighting;
pub mod math;

use engine::image::RgbaImage;
use engine::types::Extent;
use lighting::light::{lights_from_buffer, Light};

/// Initialize the WASM module (call once from JS).
#[wasm_bindgen(start)]
pub fn init() {
    console_log!("light-levels {} ready", env!("CARGO_PKG_VERSION"));
}

/// Apply lights in place to an RGBA8 pixel buffer.
///
/// `rgba`: Uint8Array / Uint8ClampedArray (width * height * 4 bytes),
///         e.g. the `data` of a canvas ImageData
/// `light_params`: Float64Array, layout described on `lights_from_buffer`
///
/// Returns the number of in-range pixels written, summed over all lights.
#[wasm_bindgen]
pub fn apply_lights(rgba: &mut [u8], width: u32, height: u32, light_params: &[f64]) -> u32 {
    let lights = lights_from_buffer(light_params);
    let written = light_rgba(rgba, width, height, &lights);
    console_log!("applied {} lights to {}x{}: {} pixels", lights.len(), width, height, written);
    written
}

/// Apply lights to a copy of an RGBA8 pixel buffer.
///
/// The input is left untouched; the result is ready for `new ImageData(...)`.
#[wasm_bindgen]
pub fn apply_lights_copy(
    rgba: &[u8],
    width: u32,
    height: u32,
    light_params: &[f64],
) -> js_sys::Uint8ClampedArray {
    let out = apply_lights_to_vec(rgba, width, height, light_params);
    js_sys::Uint8ClampedArray::from(out.as_slice())
}

/// One line per decoded light: `x: .., y: .., r: .., color: rgb(..)`.
#[wasm_bindgen]
pub fn describe_lights(light_params: &[f64]) -> String {
    lights_from_buffer(light_params)
        .iter()
        .map(Light::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cached extent of each decoded light as `[x, y, width, height, ...]`.
#[wasm_bindgen]
pub fn light_extents(light_params: &[f64]) -> Vec<f64> {
    lights_from_buffer(light_params)
        .iter()
        .map(Light::extent)
        .flat_map(|Extent { x, y, width, height }| [x, y, width, height])
        .collect()
}

/// Copy-producing pass over an RGBA8 buffer, without the JS wrapper.
pub fn apply_lights_to_vec(rgba: &[u8], width: u32, height: u32, light_params: &[f64]) -> Vec<u8> {
    let lights = lights_from_buffer(light_params);
    let mut out = rgba.to_vec();
    let written = light_rgba(&mut out, width, height, &lights);
    console_log!("applied {} lights to copy of {}x{}: {} pixels", lights.len(), width, height, written);
    out
}

fn light_rgba(rgba: &mut [u8], width: u32, height: u32, lights: &[Light]) -> u32 {
    let mut image = RgbaImage::new(rgba, width, height);
    lights
        .iter()
        .map(|light| lighting::apply::apply_light(&mut image, light))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Rgb;
    use crate::lighting::light::lights_to_buffer;

    fn scenario_params() -> Vec<f64> {
        lights_to_buffer(&[Light::new(5.0, 5.0, 4.0, Rgb::new(100, 50, 25), 0.0)])
    }

    #[test]
    fn test_apply_lights_in_place() {
        let mut rgba = vec![0u8; 10 * 10 * 4];
        let written = apply_lights(&mut rgba, 10, 10, &scenario_params());
        assert!(written > 0);

        let center = (5 * 10 + 5) * 4;
        assert_eq!(&rgba[center..center + 4], &[100, 50, 25, 255]);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_apply_lights_to_vec_leaves_input() {
        let rgba = vec![7u8; 10 * 10 * 4];
        let out = apply_lights_to_vec(&rgba, 10, 10, &scenario_params());
        assert!(rgba.iter().all(|&b| b == 7));

        let mut expected = rgba.clone();
        apply_lights(&mut expected, 10, 10, &scenario_params());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_short_buffer_does_not_panic() {
        // claims 10x10 but only holds three rows and a bit
        let mut rgba = vec![0u8; 10 * 4 * 3 + 5];
        apply_lights(&mut rgba, 10, 10, &scenario_params());
        assert_eq!(rgba.len(), 10 * 4 * 3 + 5);
        // row 2 is in range of the light at (5, 5) r = 4: (5, 2) is 3 away
        let i = (2 * 10 + 5) * 4;
        assert_eq!(&rgba[i..i + 4], &[100, 50, 25, 255]);
    }

    #[test]
    fn test_huge_width_does_not_touch_buffer() {
        // width * 4 would wrap to 4 in 32-bit arithmetic, fitting "two rows"
        let mut rgba = vec![0u8; 8];
        let params = lights_to_buffer(&[Light::new(0.0, 0.0, 4.0, Rgb::WHITE, 0.0)]);
        assert_eq!(apply_lights(&mut rgba, 0x4000_0001, 2, &params), 0);
        assert_eq!(rgba, vec![0u8; 8]);
    }

    #[test]
    fn test_empty_params_is_noop() {
        let mut rgba = vec![3u8; 4 * 4 * 4];
        assert_eq!(apply_lights(&mut rgba, 4, 4, &[]), 0);
        assert!(rgba.iter().all(|&b| b == 3));
    }

    #[test]
    fn test_describe_lights() {
        let params = lights_to_buffer(&[
            Light::new(5.0, 5.0, 4.0, Rgb::new(100, 50, 25), 0.0),
            Light::new(1.5, 2.0, 3.0, Rgb::WHITE, 0.5),
        ]);
        assert_eq!(
            describe_lights(&params),
            "x: 5, y: 5, r: 4, color: rgb(100, 50, 25)\nx: 1.5, y: 2, r: 3, color: rgb(255, 255, 255)"
        );
    }

    #[test]
    fn test_light_extents() {
        let params = lights_to_buffer(&[Light::new(10.0, 20.0, 8.0, Rgb::WHITE, 0.0)]);
        assert_eq!(light_extents(&params), vec![6.0, 16.0, 4.0, 4.0]);
    }
}
