//! Raymarching for scenes
//!
//! Implements the sphere tracing algorithm for ray-scene intersection.
//! Marching is an explicit loop, so call-stack depth does not grow with
//! the number of steps.
//!
//! Author: Moroya Sakamoto

mod march;

pub use march::{ray_march, ray_march_detailed, MarchResult};
