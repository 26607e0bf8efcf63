//! Common test helpers for ALICE-March integration tests
//!
//! Author: Moroya Sakamoto

#![allow(dead_code)]

use alice_march::prelude::*;

// ============================================================================
// Standard test scenes
// ============================================================================

/// Pure red
pub fn red() -> Color {
    DVec3::new(1.0, 0.0, 0.0)
}

/// Pure blue
pub fn blue() -> Color {
    DVec3::new(0.0, 0.0, 1.0)
}

/// Unit sphere at origin, default material
pub fn unit_sphere() -> SceneNode {
    sphere(DVec3::ZERO, 1.0)
}

/// Settings used by the marching scenarios: tight tolerance, budget 100
pub fn scenario_settings() -> ImageSettings {
    ImageSettings {
        tolerance: 1e-5,
        render_distance: 100.0,
        background_color: DVec3::new(0.25, 0.5, 0.75),
        sun_position: DVec3::new(10.0, 0.0, 10.0),
        ..ImageSettings::default()
    }
}

// ============================================================================
// Standard test points
// ============================================================================

/// Points spread around (and inside) the unit sphere
pub fn test_points() -> Vec<Position> {
    vec![
        DVec3::ZERO,                     // center
        DVec3::new(1.0, 0.0, 0.0),       // X-axis surface
        DVec3::new(0.0, 1.0, 0.0),       // Y-axis surface
        DVec3::new(0.0, 0.0, -1.0),      // -Z surface
        DVec3::new(0.577, 0.577, 0.577), // diagonal (~surface)
        DVec3::new(2.0, 0.0, 0.0),       // outside X
        DVec3::new(0.0, -1.5, 0.0),      // outside -Y
        DVec3::new(0.3, 0.3, 0.3),       // inside
        DVec3::new(-4.0, 2.5, 7.0),      // far away
    ]
}

/// Unit directions covering all octants
pub fn test_directions() -> Vec<Direction> {
    let mut dirs = Vec::new();
    for &x in &[-1.0, 0.5, 2.0] {
        for &y in &[-0.3, 1.0] {
            for &z in &[-2.0, 0.7] {
                dirs.push(DVec3::new(x, y, z).normalize());
            }
        }
    }
    dirs
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two vectors are close within tolerance
pub fn assert_vec_close(a: DVec3, b: DVec3, tol: f64, msg: &str) {
    assert!(
        (a - b).length() < tol,
        "{}: {:?} vs {:?} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).length(),
        tol
    );
}
