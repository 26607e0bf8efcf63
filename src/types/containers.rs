//! Container types: SceneFile, Ray
//!
//! Author: Moroya Sakamoto

use serde::{Deserialize, Serialize};

use super::{ImageSettings, SceneNode};
use crate::error::RenderError;
use crate::vector::{normalize, Direction, Position};

/// Scene file - top-level container for a render job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    /// Version string
    pub version: String,
    /// Image settings
    pub settings: ImageSettings,
    /// Root node
    pub scene: SceneNode,
}

impl SceneFile {
    /// Create a new scene file
    pub fn new(settings: ImageSettings, scene: SceneNode) -> Self {
        SceneFile {
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings,
            scene,
        }
    }

    /// Get total node count
    pub fn node_count(&self) -> u32 {
        self.scene.node_count()
    }
}

/// Ray for marching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Position,
    /// Ray direction (expected normalized)
    pub direction: Direction,
}

impl Ray {
    /// Create a ray from an already-normalized direction
    #[inline(always)]
    pub fn new(origin: Position, direction: Direction) -> Self {
        Ray { origin, direction }
    }

    /// Create a ray towards `direction`, normalizing it
    ///
    /// # Errors
    /// `RenderError::InvalidVector` for a zero direction.
    pub fn towards(origin: Position, direction: Direction) -> Result<Self, RenderError> {
        Ok(Ray {
            origin,
            direction: normalize(direction)?,
        })
    }

    /// Get point along ray at distance t
    #[inline(always)]
    pub fn at(&self, t: f64) -> Position {
        self.origin + self.direction * t
    }
}
