//! Core types for ALICE-March
//!
//! Defines the SceneNode tree structure, materials and evaluation samples.
//!
//! Author: Moroya Sakamoto

use crate::vector::{Color, Position};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod constructors;
mod containers;
mod operations;
mod settings;

pub use constructors::{point_to_scene, sphere};
pub use containers::{Ray, SceneFile};
pub use operations::{colorize, merge};
pub use settings::ImageSettings;

/// Surface material
///
/// `specular_lighting` and `gloss` are carried through every scene operation
/// but the shading model does not read them yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color (linear RGB)
    pub color: Color,
    /// Specular exponent
    pub specular_lighting: f64,
    /// Gloss factor
    pub gloss: f64,
}

impl Default for Material {
    /// Opaque white, specular 20, gloss 0.5
    fn default() -> Self {
        Material {
            color: DVec3::ONE,
            specular_lighting: 20.0,
            gloss: 0.5,
        }
    }
}

impl Material {
    /// Create a material
    pub fn new(color: Color, specular_lighting: f64, gloss: f64) -> Self {
        Material {
            color,
            specular_lighting,
            gloss,
        }
    }

    /// Same material with a different color
    #[inline(always)]
    pub fn with_color(self, color: Color) -> Self {
        Material { color, ..self }
    }
}

/// Result of evaluating a scene at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Signed distance to the nearest surface (negative inside)
    pub distance: f64,
    /// Material of the nearest surface
    pub material: Material,
}

impl Sample {
    /// Create a sample
    #[inline(always)]
    pub fn new(distance: f64, material: Material) -> Self {
        Sample { distance, material }
    }
}

/// Scene Node
///
/// A scene is a tree of these nodes. Leaves are primitives carrying their
/// own material; inner nodes combine or recolor their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    // === Primitives ===
    /// Sphere at an arbitrary center
    Sphere {
        /// Sphere center
        center: Position,
        /// Sphere radius
        radius: f64,
        /// Surface material
        material: Material,
    },

    /// Zero-radius marker at a point (used to represent a light)
    Point {
        /// Marker position
        position: Position,
        /// Marker material
        material: Material,
    },

    // === Operations ===
    /// CSG union: nearest of the two children, ties resolved to `b`
    Union {
        /// First operand
        a: Arc<SceneNode>,
        /// Second operand (wins ties)
        b: Arc<SceneNode>,
    },

    /// Replace the color of the child's material, keeping the geometry
    Colorize {
        /// Shape being painted
        child: Arc<SceneNode>,
        /// New color
        color: Color,
    },
}

impl SceneNode {
    /// Get total node count
    pub fn node_count(&self) -> u32 {
        match self {
            SceneNode::Sphere { .. } | SceneNode::Point { .. } => 1,
            SceneNode::Union { a, b } => 1 + a.node_count() + b.node_count(),
            SceneNode::Colorize { child, .. } => 1 + child.node_count(),
        }
    }

    /// Number of primitive leaves in the tree
    pub fn primitive_count(&self) -> u32 {
        match self {
            SceneNode::Sphere { .. } | SceneNode::Point { .. } => 1,
            SceneNode::Union { a, b } => a.primitive_count() + b.primitive_count(),
            SceneNode::Colorize { child, .. } => child.primitive_count(),
        }
    }
}
