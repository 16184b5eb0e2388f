// One error type for the whole program.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Raw pixel access could not be acquired; synthesis cannot proceed.
    #[error("Pixel buffer access error: {0}")]
    BufferAccess(String),

    /// Writing the texture to disk failed. The in-memory buffer is untouched.
    #[error("Export to {} failed: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
