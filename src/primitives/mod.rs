//! Primitive SDF shapes
//!
//! Pure distance functions on `DVec3`. Materials are attached by the scene
//! tree; these only answer "how far is the surface".
//!
//! Author: Moroya Sakamoto

mod point;
mod sphere;

pub use point::sdf_point;
pub use sphere::sdf_sphere_at;
