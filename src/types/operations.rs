//! Operation methods for SceneNode
//!
//! Author: Moroya Sakamoto

use super::SceneNode;
use crate::vector::Color;
use std::sync::Arc;

impl SceneNode {
    /// Union with another scene (ties resolve to `other`)
    #[inline]
    pub fn union(self, other: SceneNode) -> Self {
        SceneNode::Union {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }

    /// Repaint this scene with a new color
    #[inline]
    pub fn colorize(self, color: Color) -> Self {
        SceneNode::Colorize {
            child: Arc::new(self),
            color,
        }
    }
}

/// CSG union of two scene trees
pub fn merge(a: SceneNode, b: SceneNode) -> SceneNode {
    a.union(b)
}

/// Replace the color of every material produced by `scene`
pub fn colorize(color: Color, scene: SceneNode) -> SceneNode {
    scene.colorize(color)
}
