//! Image saving utilities.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Resolve the output format from the path's extension.
///
/// Only formats this build encodes with a full 8-bit alpha channel are
/// accepted: PNG, lossless WebP and 32-bit BMP.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOutputFormat`] for known formats without one
/// (JPEG has no alpha, GIF only 1-bit transparency) and [`Error::ImageSave`]
/// for unknown extensions.
pub fn output_format<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
    let path = path.as_ref();

    let format = ImageFormat::from_path(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp => Ok(format),
        other => Err(Error::UnsupportedOutputFormat {
            path: path.to_path_buf(),
            format: format!("{other:?}"),
        }),
    }
}

/// Save an RGBA image, keeping its alpha channel.
///
/// The format is inferred from the extension (see [`output_format`]) and
/// checked before anything is written, so a rejected path leaves no file.
///
/// # Errors
///
/// Returns an error if the format cannot hold alpha or the file cannot be written.
pub fn save_rgba<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = output_format(path)?;

    img.save_with_format(path, format).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
