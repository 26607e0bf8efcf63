//! Camera and ray generation
//!
//! A pinhole camera at the origin. Pixel columns and rows map onto evenly
//! spaced coordinates in [-1, 1]; rows run top to bottom, so the y
//! coordinate is flipped to keep the scene right-handed.
//!
//! Author: Moroya Sakamoto

use crate::error::RenderError;
use crate::types::{ImageSettings, Ray};
use crate::vector::normalize;
use glam::DVec3;
use std::f64::consts::PI;

/// `n` values evenly spaced from -1 to 1 inclusive
///
/// The first value is exactly -1 and the last exactly 1.
///
/// # Errors
/// `RenderError::Config` when `n < 2` (the spacing would divide by zero).
pub fn spaced_points(n: usize) -> Result<Vec<f64>, RenderError> {
    if n < 2 {
        return Err(RenderError::Config(format!(
            "need at least 2 sample points per axis, got {}",
            n
        )));
    }
    let last = (n - 1) as f64;
    Ok((0..n).map(|i| -1.0 + 2.0 * i as f64 / last).collect())
}

/// Depth component shared by every ray of an image
#[inline]
pub fn focal_depth(field_of_view: f64) -> f64 {
    (PI - field_of_view / 2.0).tan()
}

/// Generate the grid of camera rays, one row per image row
///
/// All rays start at the origin. The ray for column `x` and row `y` points
/// along `normalize(x, -y, tan(pi - fov / 2))`.
pub fn get_rays(settings: &ImageSettings) -> Result<Vec<Vec<Ray>>, RenderError> {
    let xs = spaced_points(settings.width)?;
    let ys = spaced_points(settings.height)?;
    let z = focal_depth(settings.field_of_view);

    ys.iter()
        .map(|&y| {
            xs.iter()
                .map(|&x| normalize(DVec3::new(x, -y, z)).map(|dir| Ray::new(DVec3::ZERO, dir)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_spaced_points_endpoints() {
        for n in [2, 3, 7, 10, 255, 1000] {
            let points = spaced_points(n).unwrap();
            assert_eq!(points.len(), n);
            assert_eq!(points[0], -1.0);
            assert_eq!(points[n - 1], 1.0);
            assert!(points.windows(2).all(|w| w[0] < w[1]), "not increasing for n={}", n);
        }
    }

    #[test]
    fn test_spaced_points_three() {
        assert_eq!(spaced_points(3).unwrap(), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_spaced_points_too_few() {
        assert!(matches!(spaced_points(1), Err(RenderError::Config(_))));
        assert!(matches!(spaced_points(0), Err(RenderError::Config(_))));
    }

    #[test]
    fn test_get_rays_shape() {
        let settings = ImageSettings::default().with_size(4, 3);
        let rays = get_rays(&settings).unwrap();
        assert_eq!(rays.len(), 3);
        assert!(rays.iter().all(|row| row.len() == 4));
        for ray in rays.iter().flatten() {
            assert_eq!(ray.origin, DVec3::ZERO);
            assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_get_rays_orientation() {
        let settings = ImageSettings {
            field_of_view: FRAC_PI_2,
            ..ImageSettings::default().with_size(3, 3)
        };
        let rays = get_rays(&settings).unwrap();

        // tan(3pi/4) = -1: the camera looks down -z
        let center = rays[1][1].direction;
        assert!((center - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);

        // Top-left pixel points up and left
        let top_left = rays[0][0].direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        // Bottom-right pixel points down and right
        let bottom_right = rays[2][2].direction;
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }

    #[test]
    fn test_get_rays_rejects_degenerate_size() {
        let settings = ImageSettings::default().with_size(1, 5);
        assert!(matches!(get_rays(&settings), Err(RenderError::Config(_))));
    }
}
