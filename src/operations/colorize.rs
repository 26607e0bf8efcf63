//! Colorize operation for scene samples
//!
//! Author: Moroya Sakamoto

use crate::types::Sample;
use crate::vector::Color;

/// Replace the color of a sample's material
///
/// Distance, specular lighting and gloss pass through unchanged.
#[inline(always)]
pub fn sample_colorize(sample: Sample, color: Color) -> Sample {
    Sample {
        material: sample.material.with_color(color),
        ..sample
    }
}
