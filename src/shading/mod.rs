//! Shading: surface normals, hard shadows and color composition
//!
//! A hit point is lit when a shadow probe marched towards the sun either
//! escapes the scene or lands on the sun marker itself. Anything else in the
//! way tints the base color by [`SHADOW_TINT`]. There is no specular or
//! gloss term; those material fields are carried but unused.
//!
//! Author: Moroya Sakamoto

mod shadow;

pub use shadow::{shadow_probe, Visibility};

use crate::error::RenderError;
use crate::eval::{gradient, Scene};
use crate::raycast::ray_march;
use crate::types::{ImageSettings, Ray};
use crate::vector::{normalize, Color, Direction, Position};
use glam::DVec3;

/// Multiplier applied to the base color of occluded points
pub const SHADOW_TINT: Color = DVec3::new(0.5, 0.5, 0.5);

/// Estimate the surface normal at a point
///
/// Central differences with step `settings.tolerance` on each axis (six scene
/// evaluations), normalized.
///
/// # Errors
/// `RenderError::InvalidVector` where the distance field is flat.
#[inline]
pub fn calc_normal<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    point: Position,
) -> Result<Direction, RenderError> {
    normalize(gradient(scene, point, settings.tolerance))
}

/// Trace one camera ray and compute its final, clamped color
///
/// Misses return the background color. Hits return the material color at
/// the hit point, dimmed by [`SHADOW_TINT`] when the sun is occluded.
pub fn ray_render<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    ray: Ray,
) -> Result<Color, RenderError> {
    let Some(position) = ray_march(settings, scene, ray) else {
        return Ok(clamp(settings.background_color));
    };

    let base_color = scene.sample(position).material.color;

    let color = match shadow_probe(settings, scene, position)? {
        Visibility::Lit => base_color,
        Visibility::Occluded => SHADOW_TINT * base_color,
    };

    Ok(clamp(color))
}

/// Clamp each channel to [0, 1]
#[inline(always)]
pub fn clamp(color: Color) -> Color {
    DVec3::new(
        color.x.min(1.0).max(0.0),
        color.y.min(1.0).max(0.0),
        color.z.min(1.0).max(0.0),
    )
}

/// Quantize a color to 8-bit RGB
///
/// Expects a clamped color; channels outside [0, 1] saturate at 0 or 255
/// and NaN becomes 0.
#[inline(always)]
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        (color.x * 255.0).round() as u8,
        (color.y * 255.0).round() as u8,
        (color.z * 255.0).round() as u8,
    ]
}
