//! Vector algebra on top of `glam::DVec3`
//!
//! `DVec3` already provides the componentwise arithmetic the renderer needs
//! (add, subtract, negate, `abs`, Hadamard product via `*`, scalar scale,
//! `dot`, `length_squared`, `length`). This module adds the few operations
//! whose semantics differ from glam's: normalization fails with a typed error
//! instead of yielding NaN, and tolerance comparison is explicit.
//!
//! Author: Moroya Sakamoto

use crate::error::RenderError;
use glam::DVec3;

/// Three-component vector (position, direction or RGB color)
pub type Vector3 = DVec3;

/// A point in scene space
pub type Position = DVec3;

/// A unit-length vector (by convention of the producer)
pub type Direction = DVec3;

/// Linear RGB color, nominally in [0, 1] but unclamped internally
pub type Color = DVec3;

/// Normalize a vector to unit length
///
/// # Errors
/// `RenderError::InvalidVector` if the magnitude is zero or not finite.
#[inline]
pub fn normalize(v: Vector3) -> Result<Direction, RenderError> {
    v.try_normalize().ok_or(RenderError::InvalidVector(v))
}

/// `|a - b| < epsilon` for scalars
#[inline(always)]
pub fn equal_within_error(epsilon: f64, a: f64, b: f64) -> bool {
    (a - b).abs() < epsilon
}

/// `|a - b| < epsilon` for vectors, using the magnitude of the difference
#[inline(always)]
pub fn vec_equal_within_error(epsilon: f64, a: Vector3, b: Vector3) -> bool {
    (a - b).length() < epsilon
}
