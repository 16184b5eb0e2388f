// Saves the texture buffer as a PNG file.
// Only reads the buffer, so a failed save never disturbs what's on screen.

use std::path::Path;

use image::error::{LimitError, LimitErrorKind};
use image::{ExtendedColorType, ImageError, ImageFormat};

use crate::error::Error;
use crate::types::PixelBuffer;

/// Write `buffer` as an RGBA8 PNG at `path`.
pub fn export_png(buffer: &PixelBuffer, path: &Path) -> Result<(), Error> {
    let export_err = |source: ImageError| Error::Export { path: path.to_path_buf(), source };
    let dim = |v: usize| {
        u32::try_from(v).map_err(|_| {
            export_err(ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)))
        })
    };

    let (w, h) = (dim(buffer.width())?, dim(buffer.height())?);
    image::save_buffer_with_format(
        path,
        buffer.pixels(),
        w,
        h,
        ExtendedColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(export_err)
}
