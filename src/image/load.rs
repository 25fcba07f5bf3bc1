//! Image loading utilities.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Load an image from disk and normalize it to 8-bit RGBA.
///
/// Sources without an alpha channel come back fully opaque. Sources with
/// 16-bit or float channels are scaled down to 8 bits.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file does not exist or cannot be decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        color = ?img.color(),
        width = img.width(),
        height = img.height(),
        "decoded {}",
        path.display()
    );

    Ok(img.into_rgba8())
}
