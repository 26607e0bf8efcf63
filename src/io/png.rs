//! PNG output for rendered pixel grids
//!
//! Author: Moroya Sakamoto

use crate::eval::Scene;
use crate::io::IoError;
use crate::render::{quantize, render_colors, render_colors_serial};
use crate::types::ImageSettings;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Convert a row-major pixel grid to an `RgbImage`
///
/// # Errors
/// `IoError::InvalidFormat` if rows have differing lengths or the grid is
/// too large for the encoder.
pub fn to_rgb_image(pixels: &[Vec<[u8; 3]>]) -> Result<RgbImage, IoError> {
    let height = pixels.len();
    let width = pixels.first().map_or(0, Vec::len);

    if pixels.iter().any(|row| row.len() != width) {
        return Err(IoError::InvalidFormat(
            "pixel rows have differing lengths".to_string(),
        ));
    }
    let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::InvalidFormat(format!(
                "image too large: {}x{}",
                width, height
            )))
        }
    };

    Ok(RgbImage::from_fn(w, h, |x, y| {
        Rgb(pixels[y as usize][x as usize])
    }))
}

/// Encode a pixel grid as PNG
pub fn save_png(path: impl AsRef<Path>, pixels: &[Vec<[u8; 3]>]) -> Result<(), IoError> {
    let img = to_rgb_image(pixels)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Render a scene and write the result as PNG
///
/// `serial` keeps rendering on the calling thread.
///
/// # Errors
/// `IoError::Render` if the settings are invalid or shading fails, before
/// anything is written.
pub fn render_to_png<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    path: impl AsRef<Path>,
    serial: bool,
) -> Result<(), IoError> {
    let colors = if serial {
        render_colors_serial(settings, scene)?
    } else {
        render_colors(settings, scene)?
    };
    save_png(path, &quantize(&colors))
}
