//! PNG export of composited avatars and companions

use std::io::Cursor;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageOutputFormat, RgbaImage};
use thiserror::Error;

/// Error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode an image to PNG bytes in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageOutputFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Save an image as a PNG file.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), ExportError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Integer-scale an image with nearest-neighbor sampling.
///
/// Pixel art must stay crisp: no interpolation, each cell becomes a
/// `factor` x `factor` block. A factor of 0 is treated as 1.
pub fn scale_nearest(image: &RgbaImage, factor: u32) -> RgbaImage {
    let factor = factor.max(1);
    imageops::resize(
        image,
        image.width() * factor,
        image.height() * factor,
        FilterType::Nearest,
    )
}
