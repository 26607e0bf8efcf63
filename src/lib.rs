//! # ALICE-March
//!
//! Sphere-tracing renderer for scenes described as Signed Distance Fields.
//!
//! A scene is a pure function from a position to the signed distance of the
//! nearest surface and that surface's material. Camera rays are marched
//! through the field until they land on a surface or run out of budget;
//! hits are shaded with a single hard-shadow probe towards the sun.
//!
//! ## Features
//!
//! - **Scene tree**: Sphere and point primitives, union and recoloring
//! - **Closures as scenes**: anything `Fn(Position) -> Sample + Sync`
//! - **Raymarching**: iterative sphere tracing with a travel budget
//! - **Shading**: finite-difference normals, hard shadows
//! - **Parallel rendering**: rows rendered with rayon
//! - **File I/O**: JSON scene files, PNG output (`image` feature)
//!
//! ## Example
//!
//! ```rust
//! use alice_march::prelude::*;
//!
//! let scene = SceneNode::sphere(DVec3::new(0.0, 0.0, -3.0), 1.0)
//!     .colorize(DVec3::new(1.0, 0.0, 0.0));
//!
//! let settings = ImageSettings::default().with_size(32, 32);
//! let pixels = render(&settings, &scene).unwrap();
//! assert_eq!(pixels.len(), 32);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod camera;
pub mod demo;
pub mod error;
pub mod eval;
pub mod io;
pub mod operations;
pub mod primitives;
pub mod raycast;
pub mod render;
pub mod shading;
pub mod types;
pub mod vector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::camera::{get_rays, spaced_points};
    pub use crate::demo::{demo_scene, demo_scene_file};
    pub use crate::error::RenderError;
    pub use crate::eval::{eval, merge_scenes, Scene};
    pub use crate::raycast::{ray_march, ray_march_detailed, MarchResult};
    pub use crate::render::{quantize, render, render_colors, render_colors_serial};
    pub use crate::shading::{
        calc_normal, clamp, color_to_rgb, ray_render, shadow_probe, Visibility, SHADOW_TINT,
    };
    pub use crate::types::{
        colorize, merge, point_to_scene, sphere, ImageSettings, Material, Ray, Sample, SceneFile,
        SceneNode,
    };
    pub use crate::vector::{
        equal_within_error, normalize, vec_equal_within_error, Color, Direction, Position,
        Vector3,
    };
    pub use glam::DVec3;
}

// Re-exports for convenience
pub use error::RenderError;
pub use eval::{eval, Scene};
pub use render::render;
pub use types::{ImageSettings, SceneNode};
