// Software stroke primitives for the texture buffer.
// Everything here alpha-blends (source-over) onto the existing pixels;
// pixels a primitive doesn't cover are never touched.

use crate::error::Error;
use crate::surface::Surface;
use crate::types::{PixelBuffer, Rgba, Stroke};

/// Source-over blend: `src.a` is the coverage of the new color.
#[inline]
pub fn blend(dst: Rgba, src: Rgba) -> Rgba {
    let a = src.a as f32 / 255.0;
    let mix = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
    let out_a = (src.a as f32 + dst.a as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
    Rgba::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), out_a)
}

/// Blend one pixel if (x,y) is inside bounds.
#[inline]
fn blend_pixel(fb: &mut PixelBuffer, x: i64, y: i64, color: Rgba) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if let Some(dst) = fb.get(x, y) {
        fb.set(x, y, blend(dst, color));
    }
}

/// Clip a segment to the closed box [lo, hi] (Liang-Barsky).
/// Returns None when nothing of it lies inside. Endpoints already inside
/// are returned unchanged.
fn clip_segment(
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    lo: (f64, f64),
    hi: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, x0 - lo.0), (dx, hi.0 - x0), (-dy, y0 - lo.1), (dy, hi.1 - y0)] {
        if p == 0.0 {
            // Parallel to this edge: fully outside or irrelevant.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let start = if t0 > 0.0 { (x0 + t0 * dx, y0 + t0 * dy) } else { (x0, y0) };
    let end = if t1 < 1.0 { (x0 + t1 * dx, y0 + t1 * dy) } else { (x1, y1) };
    Some((start, end))
}

/// Walk the integer points from (x0,y0) to (x1,y1) using Bresenham.
fn bresenham(x0: i64, y0: i64, x1: i64, y1: i64, mut plot: impl FnMut(i64, i64)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> usize {
        PixelBuffer::width(self)
    }

    fn height(&self) -> usize {
        PixelBuffer::height(self)
    }

    fn load_pixels(&mut self) -> Result<&mut [u8], Error> {
        PixelBuffer::load_pixels(self)
    }

    fn update_pixels(&mut self) {
        PixelBuffer::update_pixels(self)
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: &Stroke) {
        if stroke.weight == 0 {
            return;
        }
        let coords = [x0, y0, x1, y1];
        if coords.iter().any(|c| !c.is_finite()) || self.is_empty() {
            return;
        }
        let w = stroke.weight as i64;
        let off = w / 2;

        // Only the part of the segment that can stamp into the buffer is walked.
        let margin = w as f64;
        let hi = (
            PixelBuffer::width(self) as f64 - 1.0 + margin,
            PixelBuffer::height(self) as f64 - 1.0 + margin,
        );
        let Some(((x0, y0), (x1, y1))) = clip_segment(
            (x0 as f64, y0 as f64),
            (x1 as f64, y1 as f64),
            (-margin, -margin),
            hi,
        ) else {
            return;
        };

        // Thick lines stamp a w*w square per point; collect first so
        // overlapping stamps blend each pixel exactly once.
        let mut covered = Vec::new();
        bresenham(
            x0.round() as i64,
            y0.round() as i64,
            x1.round() as i64,
            y1.round() as i64,
            |x, y| {
                for dy in 0..w {
                    for dx in 0..w {
                        covered.push((x - off + dx, y - off + dy));
                    }
                }
            },
        );
        if w > 1 {
            covered.sort_unstable();
            covered.dedup();
        }
        for (x, y) in covered {
            blend_pixel(self, x, y, stroke.color);
        }
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: &Stroke) {
        if stroke.weight == 0 || self.is_empty() {
            return;
        }
        let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };

        // The outline is centered on the edges: half inside, half outside.
        let s = stroke.weight as f32 / 2.0;
        let (ox0, oy0, ox1, oy1) = (x - s, y - s, x + w + s, y + h + s);
        let (ix0, iy0, ix1, iy1) = (x + s, y + s, x + w - s, y + h - s);

        let px0 = ox0.floor().max(0.0) as usize;
        let py0 = oy0.floor().max(0.0) as usize;
        let px1 = (ox1.ceil().max(0.0) as usize).min(PixelBuffer::width(self));
        let py1 = (oy1.ceil().max(0.0) as usize).min(PixelBuffer::height(self));

        for py in py0..py1 {
            for px in px0..px1 {
                // Sample at the pixel center.
                let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
                let in_outer = cx >= ox0 && cx < ox1 && cy >= oy0 && cy < oy1;
                let in_inner = cx >= ix0 && cx < ix1 && cy >= iy0 && cy < iy1;
                if in_outer && !in_inner {
                    blend_pixel(self, px as i64, py as i64, stroke.color);
                }
            }
        }
    }
}
