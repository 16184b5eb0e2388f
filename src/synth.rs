// Rusty-metal texture synthesis, two passes over a Surface:
// 1) generate_base_field: every pixel shaded from three noise octaves
//    (dark warm gray pushed towards orange-brown) plus sparse wear patches
//    from a second, lower-frequency noise lookup.
// 2) apply_overlay: short semi-transparent scratch lines and a faint edge
//    highlight on top of the committed base.
// Visual: the base alone is a fixed pattern for a given noise field; the
// scratches move every time because only the overlay uses randomness.

use crate::error::Error;
use crate::noise::NoiseSource;
use crate::random::RandomSource;
use crate::surface::Surface;
use crate::types::{Rgba, Stroke};

/// Pixel coordinate -> noise coordinate for the first octave.
pub const NOISE_SCALE: f32 = 0.1;

/// (frequency multiplier, weight) per octave; the weighted sum is divided by 3.
pub const OCTAVES: [(f32, f32); 3] = [(1.0, 50.0), (2.0, 30.0), (4.0, 20.0)];

/// Dark warm gray every pixel starts from.
pub const BASE_COLOR: [f32; 3] = [70.0, 65.0, 60.0];

/// How strongly rust intensity feeds each channel (red grows fastest).
pub const RUST_WEIGHTS: [f32; 3] = [1.5, 1.0, 0.5];

/// Wear patches: a second noise lookup at this scale, above this threshold,
/// adds `WEAR_BOOST` weighted per channel.
pub const WEAR_SCALE: f32 = 0.05;
pub const WEAR_THRESHOLD: f32 = 0.6;
pub const WEAR_BOOST: f32 = 20.0;
pub const WEAR_WEIGHTS: [f32; 3] = [1.0, 0.7, 0.3];

/// Scratch lines and edge highlight drawn by the overlay pass.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    pub scratch_count: usize,
    /// Each scratch ends within +/- this many pixels of its start on both axes.
    pub scratch_reach: f32,
    pub scratch: Stroke,
    pub edge: Stroke,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            scratch_count: 500,
            scratch_reach: 50.0,
            scratch: Stroke::new(Rgba::new(100, 90, 80, 100), 1),
            edge: Stroke::new(Rgba::new(120, 110, 100, 50), 2),
        }
    }
}

/// Averaged octave sum at pixel (x,y), roughly [0, 33.3] for noise in [0,1].
pub fn rust_intensity<N: NoiseSource + ?Sized>(noise: &N, x: usize, y: usize) -> f32 {
    let nx = x as f32 * NOISE_SCALE;
    let ny = y as f32 * NOISE_SCALE;
    let sum: f32 = OCTAVES
        .iter()
        .map(|&(freq, weight)| noise.sample(nx * freq, ny * freq) * weight)
        .sum();
    sum / OCTAVES.len() as f32
}

/// Wear boost at pixel (x,y): either 0 or `WEAR_BOOST`.
pub fn wear_intensity<N: NoiseSource + ?Sized>(noise: &N, x: usize, y: usize) -> f32 {
    let v = noise.sample(x as f32 * WEAR_SCALE, y as f32 * WEAR_SCALE);
    if v > WEAR_THRESHOLD { WEAR_BOOST } else { 0.0 }
}

/// Clamp to [0,255] and round to nearest. NaN ends up as 0.
#[inline]
fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// Final base-field color of one pixel. Alpha is always 255.
pub fn shade_pixel<N: NoiseSource + ?Sized>(noise: &N, x: usize, y: usize) -> Rgba {
    let intensity = rust_intensity(noise, x, y);
    let wear = wear_intensity(noise, x, y);
    let c: [u8; 3] = std::array::from_fn(|i| {
        channel(BASE_COLOR[i] + intensity * RUST_WEIGHTS[i] + wear * WEAR_WEIGHTS[i])
    });
    Rgba::opaque(c[0], c[1], c[2])
}

/// Overwrite every pixel of `surface` with the rust base field.
///
/// Pixel access is bracketed by `load_pixels` / `update_pixels`. An empty
/// surface is left alone.
pub fn generate_base_field<S, N>(surface: &mut S, noise: &N) -> Result<(), Error>
where
    S: Surface + ?Sized,
    N: NoiseSource + ?Sized,
{
    if surface.is_empty() {
        return Ok(());
    }
    let (w, h) = (surface.width(), surface.height());
    let needed = w.checked_mul(h).and_then(|n| n.checked_mul(4));
    let pixels = surface.load_pixels()?;
    if needed.is_none_or(|n| pixels.len() < n) {
        return Err(Error::BufferAccess(format!(
            "got {} bytes for a {w}x{h} surface",
            pixels.len()
        )));
    }

    for x in 0..w {
        for y in 0..h {
            let c = shade_pixel(noise, x, y);
            let i = (x + y * w) * 4;
            pixels[i..i + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    surface.update_pixels();
    Ok(())
}

/// Scratch lines + edge highlight with the default style.
pub fn apply_overlay<S, R>(surface: &mut S, random: &mut R)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    apply_overlay_with(surface, random, &OverlayStyle::default());
}

/// Stroke `style.scratch_count` random short lines, then one outline
/// around the full surface extent. Empty surfaces are skipped.
pub fn apply_overlay_with<S, R>(surface: &mut S, random: &mut R, style: &OverlayStyle)
where
    S: Surface + ?Sized,
    R: RandomSource + ?Sized,
{
    if surface.is_empty() {
        return;
    }
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let reach = style.scratch_reach;

    for _ in 0..style.scratch_count {
        let x1 = random.random(0.0, w);
        let y1 = random.random(0.0, h);
        let x2 = x1 + random.random(-reach, reach);
        let y2 = y1 + random.random(-reach, reach);
        surface.line(x1, y1, x2, y2, &style.scratch);
    }

    surface.rect(0.0, 0.0, w, h, &style.edge);
}

/// Base field, then overlay. Runs to completion before returning.
pub fn synthesize<S, N, R>(surface: &mut S, noise: &N, random: &mut R) -> Result<(), Error>
where
    S: Surface + ?Sized,
    N: NoiseSource + ?Sized,
    R: RandomSource + ?Sized,
{
    generate_base_field(surface, noise)?;
    apply_overlay(surface, random);
    Ok(())
}
