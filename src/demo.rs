//! Demo scene
//!
//! A handful of colored spheres resting on a large "ground" sphere, framed
//! for the default camera (looking down -z from the origin).
//!
//! Author: Moroya Sakamoto

use crate::types::{ImageSettings, SceneFile, SceneNode};
use glam::DVec3;

/// Build the demo scene
pub fn demo_scene() -> SceneNode {
    let ground = SceneNode::sphere(DVec3::new(0.0, -101.0, -6.0), 100.0)
        .colorize(DVec3::new(0.4, 0.6, 0.3));
    let red = SceneNode::sphere(DVec3::new(0.0, 0.0, -5.0), 1.0)
        .colorize(DVec3::new(0.9, 0.2, 0.2));
    let blue = SceneNode::sphere(DVec3::new(-2.2, -0.3, -6.0), 0.7)
        .colorize(DVec3::new(0.2, 0.3, 0.9));
    let yellow = SceneNode::sphere(DVec3::new(1.8, -0.5, -4.5), 0.5)
        .colorize(DVec3::new(0.9, 0.8, 0.2));
    // Left in the default material
    let white = SceneNode::sphere(DVec3::new(1.0, 1.4, -6.5), 0.4);

    ground.union(red).union(blue).union(yellow).union(white)
}

/// Demo scene bundled with default settings
pub fn demo_scene_file() -> SceneFile {
    SceneFile::new(ImageSettings::default(), demo_scene())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval;

    #[test]
    fn test_demo_scene_structure() {
        let scene = demo_scene();
        assert_eq!(scene.primitive_count(), 5);
        // 5 spheres, 4 colorize, 4 unions
        assert_eq!(scene.node_count(), 13);
    }

    #[test]
    fn test_demo_camera_starts_outside() {
        // The camera origin must not sit inside any solid
        assert!(eval(&demo_scene(), DVec3::ZERO).distance > 0.0);
    }

    #[test]
    fn test_demo_red_sphere_surface() {
        let sample = eval(&demo_scene(), DVec3::new(0.0, 0.0, -4.0));
        assert!(sample.distance.abs() < 1e-12);
        assert_eq!(sample.material.color, DVec3::new(0.9, 0.2, 0.2));
    }
}
