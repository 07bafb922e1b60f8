//! Image decode/encode collaborators via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Failures from the
//! codec layer are collaborator failures with no recovery path in the core;
//! they map onto [`EdgeBenchError::ImageIo`].

use crate::image::PixelBuffer;
use crate::util::{EdgeBenchError, EdgeBenchResult};
use std::path::Path;

/// Decodes the file at `path` into an RGBA pixel buffer.
///
/// Any format the `image` crate recognizes is accepted; the decoded pixels
/// are normalized to RGBA8.
pub fn load_image<P: AsRef<Path>>(path: P) -> EdgeBenchResult<PixelBuffer> {
    let decoded = image::open(path).map_err(|err| EdgeBenchError::ImageIo {
        reason: err.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    PixelBuffer::from_vec(rgba.into_raw(), width, height)
}

/// Encodes `buffer` to `path`; the format is chosen from the extension.
pub fn save_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> EdgeBenchResult<()> {
    let width = buffer.width() as u32;
    let height = buffer.height() as u32;
    let img: image::RgbaImage =
        image::ImageBuffer::from_raw(width, height, buffer.as_bytes().to_vec()).ok_or(
            EdgeBenchError::InvalidDimensions {
                width: buffer.width(),
                height: buffer.height(),
            },
        )?;
    img.save(path).map_err(|err| EdgeBenchError::ImageIo {
        reason: err.to_string(),
    })
}
