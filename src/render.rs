//! Image assembly
//!
//! Maps every camera ray through the marcher and shader, then quantizes the
//! resulting colors. Pixels are independent, so rows are rendered in
//! parallel with rayon; the serial variant produces identical output.
//!
//! Author: Moroya Sakamoto

use crate::camera::get_rays;
use crate::error::RenderError;
use crate::eval::Scene;
use crate::shading::{color_to_rgb, ray_render};
use crate::types::{ImageSettings, Ray};
use crate::vector::Color;
use rayon::prelude::*;
use std::time::Instant;

/// Row-major grid of linear colors
pub type ColorGrid = Vec<Vec<Color>>;

/// Row-major grid of 8-bit RGB pixels, handed to an image encoder
pub type PixelGrid = Vec<Vec<[u8; 3]>>;

#[inline]
fn render_row<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    row: &[Ray],
) -> Result<Vec<Color>, RenderError> {
    row.iter().map(|ray| ray_render(settings, scene, *ray)).collect()
}

/// Render the color grid (parallel over rows)
///
/// # Errors
/// `RenderError::Config` for invalid settings, `RenderError::InvalidVector`
/// if any pixel hits a degenerate normal or light direction.
pub fn render_colors<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
) -> Result<ColorGrid, RenderError> {
    settings.validate()?;
    tracing::debug!(
        width = settings.width,
        height = settings.height,
        "rendering color grid"
    );
    let start = Instant::now();
    let rays = get_rays(settings)?;

    let colors = rays
        .par_iter()
        .map(|row| render_row(settings, scene, row))
        .collect::<Result<ColorGrid, RenderError>>()?;

    tracing::debug!(
        width = settings.width,
        height = settings.height,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendered color grid"
    );
    Ok(colors)
}

/// Render the color grid on the calling thread
pub fn render_colors_serial<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
) -> Result<ColorGrid, RenderError> {
    settings.validate()?;
    tracing::debug!(
        width = settings.width,
        height = settings.height,
        "rendering color grid"
    );
    let start = Instant::now();
    let rays = get_rays(settings)?;

    let colors = rays
        .iter()
        .map(|row| render_row(settings, scene, row))
        .collect::<Result<ColorGrid, RenderError>>()?;

    tracing::debug!(
        width = settings.width,
        height = settings.height,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendered color grid (serial)"
    );
    Ok(colors)
}

/// Quantize every color to 8-bit RGB
pub fn quantize(colors: &[Vec<Color>]) -> PixelGrid {
    colors
        .iter()
        .map(|row| row.iter().map(|&c| color_to_rgb(c)).collect())
        .collect()
}

/// Render the final pixel grid
pub fn render<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
) -> Result<PixelGrid, RenderError> {
    Ok(quantize(&render_colors(settings, scene)?))
}
