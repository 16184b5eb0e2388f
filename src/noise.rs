// Coherent noise sources for the rust layers.
// The synthesizer only needs noise(x, y) -> [0,1]; LayeredPerlin is the
// default: a few octaves of Perlin noise summed with halving amplitude.
// Visual: smooth blotches, bigger octaves for the patches, small ones for grain.

use noise::{NoiseFn, Perlin, Seedable};

/// A smooth 2D noise field returning values in [0,1].
pub trait NoiseSource {
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Any closure works as a noise field (handy for tests and custom fields).
impl<F> NoiseSource for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

/// Seeded multi-octave Perlin noise remapped to [0,1].
pub struct LayeredPerlin {
    perlin: Perlin,
    octaves: u32,
    falloff: f64,
}

impl LayeredPerlin {
    pub const DEFAULT_OCTAVES: u32 = 4;
    pub const DEFAULT_FALLOFF: f64 = 0.5;

    pub fn new(seed: u32) -> Self {
        Self::with_detail(seed, Self::DEFAULT_OCTAVES, Self::DEFAULT_FALLOFF)
    }

    /// `octaves` layers, each at twice the frequency and `falloff` times the
    /// amplitude of the previous one (first layer amplitude = `falloff`).
    pub fn with_detail(seed: u32, octaves: u32, falloff: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves: octaves.max(1),
            falloff: falloff.clamp(0.0, 1.0),
        }
    }

    pub fn seed(&self) -> u32 {
        self.perlin.seed()
    }
}

impl NoiseSource for LayeredPerlin {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let (mut fx, mut fy) = (x as f64, y as f64);
        let mut amp = self.falloff;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            // Perlin is roughly [-1,1]; shift each layer into [0,1].
            let layer = (self.perlin.get([fx, fy]) + 1.0) * 0.5;
            sum += layer * amp;
            amp *= self.falloff;
            fx *= 2.0;
            fy *= 2.0;
        }
        sum.clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_in_unit_range() {
        let n = LayeredPerlin::new(7);
        for i in 0..200 {
            for j in 0..50 {
                let v = n.sample(i as f32 * 0.37, j as f32 * 0.91);
                assert!((0.0..=1.0).contains(&v), "sample {v} out of range");
            }
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = LayeredPerlin::new(1234);
        let b = LayeredPerlin::new(1234);
        for i in 0..100 {
            let (x, y) = (i as f32 * 0.13, i as f32 * 0.29);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn field_is_not_flat() {
        let n = LayeredPerlin::new(99);
        let first = n.sample(0.3, 0.7);
        let varies = (1..100).any(|i| n.sample(0.3 + i as f32 * 0.5, 0.7) != first);
        assert!(varies);
    }

    #[test]
    fn closures_are_noise_sources() {
        let flat = |_x: f32, _y: f32| 0.25;
        assert_eq!(flat.sample(10.0, 20.0), 0.25);
    }
}
