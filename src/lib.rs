// Procedural rusty-metal texture synthesis.
// synth::synthesize fills any surface::Surface from a noise::NoiseSource and
// a random::RandomSource; types::PixelBuffer is the in-memory surface the
// viewer binary shows.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod noise;
pub mod random;
pub mod raster;
pub mod surface;
pub mod synth;
pub mod types;
pub mod window;

pub use error::Error;
pub use synth::{apply_overlay, generate_base_field, shade_pixel, synthesize};
pub use types::{PixelBuffer, Rgba, Stroke};
