// Uniform random numbers for the scratch overlay.

use rand::Rng;

pub trait RandomSource {
    /// Uniform float in [lo, hi). Returns `lo` if the range is empty.
    fn random(&mut self, lo: f32, hi: f32) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn random(&mut self, lo: f32, hi: f32) -> f32 {
        if !(hi > lo) {
            return lo;
        }
        self.gen_range(lo..hi)
    }
}
