//! Image settings
//!
//! Author: Moroya Sakamoto

use crate::error::RenderError;
use crate::vector::{Color, Position};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Image settings, shared read-only by every pixel computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSettings {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Field of view (radians)
    pub field_of_view: f64,
    /// Travel budget per ray before declaring a miss
    pub render_distance: f64,
    /// Hit threshold and finite-difference step
    pub tolerance: f64,
    /// Color returned for rays that miss
    pub background_color: Color,
    /// Position of the single light
    pub sun_position: Position,
}

impl Default for ImageSettings {
    fn default() -> Self {
        ImageSettings {
            width: 256,
            height: 256,
            field_of_view: FRAC_PI_2,
            render_distance: 100.0,
            tolerance: 1e-4,
            background_color: DVec3::new(0.1, 0.15, 0.3),
            sun_position: DVec3::new(5.0, 10.0, 0.0),
        }
    }
}

impl ImageSettings {
    /// Preview configuration: small image, coarse tolerance
    pub fn preview() -> Self {
        ImageSettings {
            width: 64,
            height: 64,
            tolerance: 1e-3,
            ..Self::default()
        }
    }

    /// Same settings with a different image size
    pub fn with_size(self, width: usize, height: usize) -> Self {
        ImageSettings {
            width,
            height,
            ..self
        }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Reject settings that would produce NaN rays or normals
    ///
    /// A non-positive `render_distance` is accepted: every ray simply misses.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width < 2 || self.height < 2 {
            return Err(RenderError::Config(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RenderError::Config(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ImageSettings::default().validate().is_ok());
        assert!(ImageSettings::preview().validate().is_ok());
    }

    #[test]
    fn test_single_pixel_rejected() {
        let settings = ImageSettings::default().with_size(1, 10);
        assert!(matches!(settings.validate(), Err(RenderError::Config(_))));
        let settings = ImageSettings::default().with_size(10, 1);
        assert!(matches!(settings.validate(), Err(RenderError::Config(_))));
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        for tolerance in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let settings = ImageSettings {
                tolerance,
                ..ImageSettings::default()
            };
            assert!(settings.validate().is_err(), "tolerance {} accepted", tolerance);
        }
    }

    #[test]
    fn test_zero_render_distance_is_valid() {
        let settings = ImageSettings {
            render_distance: 0.0,
            ..ImageSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = ImageSettings::default().with_size(32, 16);
        let json = serde_json::to_string(&settings).unwrap();
        let back: ImageSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
        assert_eq!(back.pixel_count(), 512);
    }
}
