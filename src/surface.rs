// The drawing collaborator the synthesizer writes into.

use crate::error::Error;
use crate::types::Stroke;

/// A fixed-size RGBA raster with bracketed bulk access and stroke primitives.
///
/// Pixel bytes are interleaved R,G,B,A with index `(x + y*W) * 4`.
/// Stroke primitives alpha-blend onto whatever is already there.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Begin a bulk pixel write.
    fn load_pixels(&mut self) -> Result<&mut [u8], Error>;

    /// Commit the bulk write started by `load_pixels`.
    fn update_pixels(&mut self);

    /// Stroke a straight segment between two points.
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: &Stroke);

    /// Stroke (no fill) the outline of an axis-aligned rectangle.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: &Stroke);
}
