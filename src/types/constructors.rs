//! Primitive constructors for SceneNode
//!
//! Author: Moroya Sakamoto

use super::{Material, SceneNode};
use crate::vector::Position;

impl SceneNode {
    /// Sphere with the default material
    #[inline]
    pub fn sphere(center: Position, radius: f64) -> Self {
        Self::sphere_with_material(center, radius, Material::default())
    }

    /// Sphere with an explicit material
    #[inline]
    pub fn sphere_with_material(center: Position, radius: f64, material: Material) -> Self {
        SceneNode::Sphere {
            center,
            radius,
            material,
        }
    }

    /// Zero-radius marker at a point, with the default material
    #[inline]
    pub fn point(position: Position) -> Self {
        SceneNode::Point {
            position,
            material: Material::default(),
        }
    }
}

/// Sphere with the default material
pub fn sphere(center: Position, radius: f64) -> SceneNode {
    SceneNode::sphere(center, radius)
}

/// Point marker scene, used to make a light position a marching target
pub fn point_to_scene(position: Position) -> SceneNode {
    SceneNode::point(position)
}
