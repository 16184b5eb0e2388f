// Owns the texture and reacts to the two user actions: regenerate and save.
// Visual: the buffer here is exactly what the window shows (over gray 50).

use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Args;
use crate::error::Error;
use crate::export::export_png;
use crate::noise::LayeredPerlin;
use crate::synth::synthesize;
use crate::types::{FrameBuffer, PixelBuffer};

/// Gray shown behind the texture.
pub const BACKGROUND: u8 = 50;

pub struct App {
    buffer: PixelBuffer,
    noise: LayeredPerlin,
    rng: StdRng,
    output: PathBuf,
}

impl App {
    /// Allocate the buffer, seed the noise field and render the first texture.
    pub fn new(args: &Args) -> Result<Self, Error> {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("texture {}x{}, noise seed {seed}", args.width, args.height);

        let mut app = Self {
            buffer: PixelBuffer::new(args.width, args.height),
            noise: LayeredPerlin::new(seed),
            rng: StdRng::from_entropy(),
            output: args.output.clone(),
        };
        app.render()?;
        Ok(app)
    }

    /// Use a fixed overlay RNG (reproducible scratches).
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Click handler: redraw the whole texture.
    /// The noise field is kept for the session; the scratches change.
    pub fn regenerate(&mut self) -> Result<(), Error> {
        log::info!("regenerating texture");
        self.render()
    }

    /// Key handler: write the current texture to the output path.
    pub fn save(&self) -> Result<(), Error> {
        match export_png(&self.buffer, &self.output) {
            Ok(()) => {
                log::info!("saved {}", self.output.display());
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                Err(e)
            }
        }
    }

    /// Paint the texture over the background into the window frame.
    pub fn compose_frame(&self, frame: &mut FrameBuffer) {
        frame.compose(&self.buffer, BACKGROUND);
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn noise_seed(&self) -> u32 {
        self.noise.seed()
    }

    fn render(&mut self) -> Result<(), Error> {
        let started = Instant::now();
        synthesize(&mut self.buffer, &self.noise, &mut self.rng)?;
        log::debug!(
            "synthesized {}x{} in {:.1} ms",
            self.buffer.width(),
            self.buffer.height(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }
}
