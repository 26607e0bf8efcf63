//! Point marker SDF
//!
//! Author: Moroya Sakamoto

use super::sdf_sphere_at;
use glam::DVec3;

/// Distance to a single point (a sphere of radius zero)
#[inline(always)]
pub fn sdf_point(point: DVec3, position: DVec3) -> f64 {
    sdf_sphere_at(point, position, 0.0)
}
