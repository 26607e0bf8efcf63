//! Sphere primitive SDF
//!
//! Author: Moroya Sakamoto

use glam::DVec3;

/// Signed distance to a sphere at an arbitrary center
///
/// Negative inside, zero on the surface, positive outside.
#[inline(always)]
pub fn sdf_sphere_at(point: DVec3, center: DVec3, radius: f64) -> f64 {
    (center - point).length() - radius
}
