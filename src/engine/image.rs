//! Pixel grid abstraction the lighting pass runs against.
//!
//! Two backings are provided:
//! - `RgbaImage` borrows an RGBA8 byte buffer (canvas `ImageData` layout),
//! - `PackedImage` owns a row-major grid of packed `0xAARRGGBB` integers.

use super::types::Rgb;

/// A 2D grid of colored pixels addressed by `(x, y)`, origin top-left.
///
/// `get_pixel`/`set_pixel` may panic outside `[0, width) × [0, height)`.
/// The lighting pass clips its scan to the reported size before indexing.
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_pixel(&self, x: u32, y: u32) -> Rgb;
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb);
}

/// RGBA8 view over a caller-owned byte buffer.
///
/// A buffer shorter than `width * height * 4` only exposes the complete
/// rows it holds. If not even one row fits, the image is empty.
pub struct RgbaImage<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaImage<'a> {
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Self {
        // row math in u64: width * 4 overflows a 32-bit usize on wasm32
        let row_bytes = width as u64 * 4;
        let rows = if row_bytes == 0 { 0 } else { data.len() as u64 / row_bytes };
        let height = (height as u64).min(rows) as u32;
        let width = if height == 0 { 0 } else { width };
        Self { data, width, height }
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl PixelGrid for RgbaImage<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = 255;
    }
}

/// Owned raster of packed `0xAARRGGBB` pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedImage {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl PackedImage {
    /// New image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let len = width as usize * height as usize;
        Self { pixels: vec![color.to_packed(); len], width, height }
    }

    /// Wrap existing packed pixels. Missing pixels are padded with opaque
    /// black and extra ones are dropped.
    pub fn from_packed(mut pixels: Vec<u32>, width: u32, height: u32) -> Self {
        pixels.resize(width as usize * height as usize, Rgb::BLACK.to_packed());
        Self { pixels, width, height }
    }

    /// Packed value at `(x, y)`, alpha included.
    pub fn get_packed(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

impl PixelGrid for PackedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from_packed(self.get_packed(x, y))
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = y as usize * self.width as usize + x as usize;
        self.pixels[i] = color.to_packed();
    }
}
