//! Scene Evaluation
//!
//! Functions for evaluating scenes at points.
//!
//! A scene is anything implementing [`Scene`]: a pure, thread-safe mapping
//! from a position to a [`Sample`]. `SceneNode` trees are the usual
//! implementation, but any `Fn(Position) -> Sample + Sync` closure works too.
//!
//! Author: Moroya Sakamoto

use crate::operations::{sample_colorize, sample_union};
use crate::primitives::{sdf_point, sdf_sphere_at};
use crate::types::{Sample, SceneNode};
use crate::vector::{Position, Vector3};
use glam::DVec3;

/// A signed distance field with materials
///
/// Implementations must be pure: the same position always yields the same
/// sample, and evaluation has no side effects. Marching only terminates
/// reliably when `distance` never overestimates the true distance.
pub trait Scene: Sync {
    /// Evaluate distance and material at a point
    fn sample(&self, point: Position) -> Sample;

    /// Evaluate only the distance at a point
    #[inline(always)]
    fn distance(&self, point: Position) -> f64 {
        self.sample(point).distance
    }
}

impl Scene for SceneNode {
    #[inline(always)]
    fn sample(&self, point: Position) -> Sample {
        eval(self, point)
    }
}

impl<F> Scene for F
where
    F: Fn(Position) -> Sample + Sync,
{
    #[inline(always)]
    fn sample(&self, point: Position) -> Sample {
        self(point)
    }
}

/// Evaluate a scene tree at a single point
///
/// Recursively traverses the tree and returns the signed distance together
/// with the material of the nearest surface.
///
/// # Arguments
/// * `node` - The scene tree root
/// * `point` - Point to evaluate
#[inline]
pub fn eval(node: &SceneNode, point: Position) -> Sample {
    match node {
        // === Primitives (Leaf Nodes) ===
        SceneNode::Sphere {
            center,
            radius,
            material,
        } => Sample::new(sdf_sphere_at(point, *center, *radius), *material),
        SceneNode::Point { position, material } => {
            Sample::new(sdf_point(point, *position), *material)
        }

        // === Operations ===
        SceneNode::Union { a, b } => sample_union(eval(a, point), eval(b, point)),
        SceneNode::Colorize { child, color } => sample_colorize(eval(child, point), *color),
    }
}

/// CSG union of two arbitrary scenes
///
/// The result evaluates both operands and keeps the strictly nearer sample;
/// on an exact tie the sample from `b` wins.
pub fn merge_scenes<'a, A, B>(a: &'a A, b: &'a B) -> impl Scene + 'a
where
    A: Scene + ?Sized,
    B: Scene + ?Sized,
{
    move |point: Position| sample_union(a.sample(point), b.sample(point))
}

/// Central-difference gradient of the scene distance
///
/// Six scene evaluations. The result is not normalized.
#[inline(always)]
pub fn gradient<S: Scene + ?Sized>(scene: &S, point: Position, epsilon: f64) -> Vector3 {
    let ex = DVec3::new(epsilon, 0.0, 0.0);
    let ey = DVec3::new(0.0, epsilon, 0.0);
    let ez = DVec3::new(0.0, 0.0, epsilon);

    let inv_2e = 1.0 / (2.0 * epsilon);

    DVec3::new(
        scene.distance(point + ex) - scene.distance(point - ex),
        scene.distance(point + ey) - scene.distance(point - ey),
        scene.distance(point + ez) - scene.distance(point - ez),
    ) * inv_2e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Material;

    fn red() -> DVec3 {
        DVec3::new(1.0, 0.0, 0.0)
    }

    #[test]
    fn test_eval_sphere() {
        let sphere = SceneNode::sphere(DVec3::ZERO, 1.0);
        assert!((eval(&sphere, DVec3::ZERO).distance + 1.0).abs() < 1e-12);
        assert!(eval(&sphere, DVec3::X).distance.abs() < 1e-12);
        assert!((eval(&sphere, DVec3::new(2.0, 0.0, 0.0)).distance - 1.0).abs() < 1e-12);
        assert_eq!(eval(&sphere, DVec3::X).material, Material::default());
    }

    #[test]
    fn test_eval_union_nearest_material() {
        let left = SceneNode::sphere(DVec3::new(-2.0, 0.0, 0.0), 1.0).colorize(red());
        let right = SceneNode::sphere(DVec3::new(2.0, 0.0, 0.0), 1.0);
        let scene = left.union(right);

        assert_eq!(eval(&scene, DVec3::new(-3.0, 0.0, 0.0)).material.color, red());
        assert_eq!(eval(&scene, DVec3::new(3.0, 0.0, 0.0)).material.color, DVec3::ONE);
    }

    #[test]
    fn test_eval_union_tie_favors_second() {
        let a = SceneNode::sphere(DVec3::new(-1.0, 0.0, 0.0), 0.5).colorize(red());
        let b = SceneNode::sphere(DVec3::new(1.0, 0.0, 0.0), 0.5).colorize(DVec3::Y);
        let scene = a.union(b);
        // Equidistant from both centers
        assert_eq!(eval(&scene, DVec3::new(0.0, 3.0, 0.0)).material.color, DVec3::Y);
    }

    #[test]
    fn test_eval_colorize_keeps_geometry() {
        let plain = SceneNode::sphere(DVec3::new(0.0, 1.0, 0.0), 2.0);
        let painted = plain.clone().colorize(red());
        for p in [DVec3::ZERO, DVec3::new(3.0, 1.0, -2.0), DVec3::splat(0.5)] {
            assert_eq!(eval(&plain, p).distance, eval(&painted, p).distance);
        }
    }

    #[test]
    fn test_eval_nested_colorize_outer_wins() {
        let scene = SceneNode::sphere(DVec3::ZERO, 1.0)
            .colorize(red())
            .colorize(DVec3::Z);
        assert_eq!(eval(&scene, DVec3::X).material.color, DVec3::Z);
    }

    #[test]
    fn test_closure_scene() {
        let plane = |p: Position| Sample::new(p.y, Material::default());
        assert_eq!(plane.distance(DVec3::new(4.0, 2.5, -1.0)), 2.5);
    }

    #[test]
    fn test_merge_scenes_matches_tree_union() {
        let a = SceneNode::sphere(DVec3::ZERO, 1.0).colorize(red());
        let b = SceneNode::point(DVec3::new(0.0, 4.0, 0.0));
        let merged = merge_scenes(&a, &b);
        let tree = a.clone().union(b.clone());

        for p in [
            DVec3::ZERO,
            DVec3::new(0.0, 2.0, 0.0),
            DVec3::new(0.0, 3.5, 0.0),
            DVec3::new(5.0, 5.0, 5.0),
        ] {
            assert_eq!(merged.sample(p), tree.sample(p));
        }
    }

    #[test]
    fn test_merge_scenes_mixed_kinds() {
        let floor = |p: Position| Sample::new(p.y + 1.0, Material::default().with_color(DVec3::Y));
        let ball = SceneNode::sphere(DVec3::new(0.0, 3.0, 0.0), 1.0);
        let merged = merge_scenes(&floor, &ball);

        assert_eq!(merged.sample(DVec3::ZERO).material.color, DVec3::Y);
        assert_eq!(merged.sample(DVec3::new(0.0, 3.0, 0.0)).distance, -1.0);
    }

    #[test]
    fn test_gradient_sphere() {
        let sphere = SceneNode::sphere(DVec3::ZERO, 1.0);
        let g = gradient(&sphere, DVec3::new(0.0, 2.0, 0.0), 1e-5);
        assert!((g - DVec3::Y).length() < 1e-6, "gradient {:?}", g);
    }
}
