//! Hard shadow probe
//!
//! Author: Moroya Sakamoto

use super::calc_normal;
use crate::error::RenderError;
use crate::eval::{merge_scenes, Scene};
use crate::raycast::ray_march;
use crate::types::{ImageSettings, Ray, SceneNode};
use crate::vector::{normalize, vec_equal_within_error, Position};

/// Whether a surface point can see the sun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Nothing between the point and the sun
    Lit,
    /// Scene geometry blocks the sun
    Occluded,
}

/// Test whether the sun is visible from a surface point
///
/// The probe starts `3 * tolerance` above the surface (along the estimated
/// normal) and marches towards the sun through the scene merged with a point
/// marker at the sun's position. Reaching the marker, or escaping the
/// travel budget, means the point is lit.
///
/// # Errors
/// `RenderError::InvalidVector` if the normal cannot be estimated or the
/// point coincides with the sun.
pub fn shadow_probe<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    position: Position,
) -> Result<Visibility, RenderError> {
    let light = settings.sun_position;
    let normal = calc_normal(settings, scene, position)?;
    let origin = position + normal * (3.0 * settings.tolerance);
    let direction = normalize(light - position)?;

    let marker = SceneNode::point(light);
    let probe_scene = merge_scenes(scene, &marker);

    let visibility = match ray_march(settings, &probe_scene, Ray::new(origin, direction)) {
        None => Visibility::Lit,
        Some(hit) if vec_equal_within_error(settings.tolerance, hit, light) => Visibility::Lit,
        Some(_) => Visibility::Occluded,
    };

    Ok(visibility)
}
