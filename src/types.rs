// Core types: the RGBA texture buffer, stroke styles and the window frame.

use crate::error::Error;

/// One 8-bit RGBA pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Outline style for line/rect primitives. `color.a` is the stroke alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub weight: u32, // stroke width in pixels
}

impl Stroke {
    pub const fn new(color: Rgba, weight: u32) -> Self {
        Self { color, weight }
    }
}

/// Offscreen RGBA8 texture, row-major, 4 bytes per pixel.
/// Bulk writes go through `load_pixels` / `update_pixels`.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
    commits: u64,
}

impl PixelBuffer {
    /// Fully transparent buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        // An impossible size leaves the storage empty; `load_pixels` reports it.
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(0);
        Self { width, height, data: vec![0; len], commits: 0 }
    }

    /// Wrap existing interleaved RGBA bytes. The length is checked on `load_pixels`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self { width, height, data, commits: 0 }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte offset of pixel (x,y): `(x + y*W) * 4`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        (x + y * self.width) * 4
    }

    /// Begin a bulk write: hands out the raw interleaved RGBA bytes.
    pub fn load_pixels(&mut self) -> Result<&mut [u8], Error> {
        let expected = self.width as u128 * self.height as u128 * 4;
        if self.data.len() as u128 != expected {
            return Err(Error::BufferAccess(format!(
                "{}x{} buffer holds {} bytes, expected {}",
                self.width,
                self.height,
                self.data.len(),
                expected
            )));
        }
        Ok(&mut self.data)
    }

    /// Commit a bulk write started with `load_pixels`.
    pub fn update_pixels(&mut self) {
        self.commits += 1;
    }

    /// Number of bulk writes committed so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Read-only view of the interleaved RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let px = self.data.get(i..i + 4)?;
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Write one pixel; out-of-bounds coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        if let Some(px) = self.data.get_mut(i..i + 4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }
}

/// What the window shows: each entry is 0x00RRGGBB for minifb.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Fill with a gray background, then alpha-composite `src` on top.
    /// Sizes may differ; only the overlapping region is copied.
    pub fn compose(&mut self, src: &PixelBuffer, background: u8) {
        let bg = background as u32;
        let bg_px = (bg << 16) | (bg << 8) | bg;
        self.pixels.fill(bg_px);

        let w = self.width.min(src.width());
        let h = self.height.min(src.height());
        for y in 0..h {
            for x in 0..w {
                let Some(p) = src.get(x, y) else { continue };
                let a = p.a as f32 / 255.0;
                let mix = |c: u8| (c as f32 * a + background as f32 * (1.0 - a)).round() as u32;
                self.pixels[y * self.width + x] = (mix(p.r) << 16) | (mix(p.g) << 8) | mix(p.b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major_rgba() {
        let buf = PixelBuffer::new(7, 3);
        assert_eq!(buf.index(0, 0), 0);
        assert_eq!(buf.index(2, 1), (2 + 7) * 4);
        assert_eq!(buf.pixels().len(), 7 * 3 * 4);
    }

    #[test]
    fn load_and_commit_pixels() {
        let mut buf = PixelBuffer::new(2, 2);
        let px = buf.load_pixels().unwrap();
        px[4..8].copy_from_slice(&[1, 2, 3, 4]);
        buf.update_pixels();
        assert_eq!(buf.commits(), 1);
        assert_eq!(buf.get(1, 0), Some(Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn load_pixels_rejects_mismatched_storage() {
        let mut buf = PixelBuffer::from_raw(4, 4, vec![0; 10]);
        assert!(matches!(buf.load_pixels(), Err(Error::BufferAccess(_))));
    }

    #[test]
    fn get_and_set_ignore_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set(5, 0, Rgba::opaque(9, 9, 9));
        assert_eq!(buf.get(5, 0), None);
        assert!(buf.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn compose_blends_over_background() {
        let mut src = PixelBuffer::new(2, 1);
        src.set(0, 0, Rgba::opaque(200, 100, 0));
        // (1,0) stays fully transparent -> background shows through
        let mut frame = FrameBuffer::new(2, 1);
        frame.compose(&src, 50);
        assert_eq!(frame.pixels[0], 0x00_C8_64_00);
        assert_eq!(frame.pixels[1], 0x00_32_32_32);
    }
}
