//! Sphere tracing (raymarching) implementation
//!
//! Each step advances the ray by the scene's distance estimate, which never
//! overshoots a surface when the scene is a valid distance bound. The loop
//! has exactly three outcomes per iteration: budget exhausted (miss),
//! distance within tolerance (hit), otherwise step.
//!
//! Author: Moroya Sakamoto

use crate::eval::Scene;
use crate::types::{ImageSettings, Ray};
use crate::vector::{equal_within_error, Position};

/// Raymarch result with detailed information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchResult {
    /// Hit position, `None` on a miss
    pub hit: Option<Position>,
    /// Position where marching stopped
    pub position: Position,
    /// Number of advancing steps taken
    pub steps: u64,
    /// Total signed distance travelled
    pub travelled: f64,
}

impl MarchResult {
    /// Whether the ray reached a surface
    #[inline(always)]
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

/// Perform sphere tracing along a ray
///
/// Returns the hit position, or `None` once the travel budget
/// (`settings.render_distance`) is used up.
#[inline]
pub fn ray_march<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    ray: Ray,
) -> Option<Position> {
    ray_march_detailed(settings, scene, ray).hit
}

/// Perform sphere tracing and report step statistics
///
/// The budget is decremented by the signed step, so negative distances
/// (inside a solid) give budget back as the ray backs out.
pub fn ray_march_detailed<S: Scene + ?Sized>(
    settings: &ImageSettings,
    scene: &S,
    ray: Ray,
) -> MarchResult {
    let mut position = ray.origin;
    let mut remaining = settings.render_distance;
    let mut steps = 0u64;

    loop {
        // `!(x > 0)` also catches a NaN budget
        if !(remaining > 0.0) {
            return MarchResult {
                hit: None,
                position,
                steps,
                travelled: settings.render_distance - remaining,
            };
        }

        let dist = scene.distance(position);

        if equal_within_error(settings.tolerance, 0.0, dist) {
            return MarchResult {
                hit: Some(position),
                position,
                steps,
                travelled: settings.render_distance - remaining,
            };
        }

        position += ray.direction * dist;
        remaining -= dist;
        steps += 1;
    }
}
