//! Error types for scene evaluation and rendering
//!
//! Author: Moroya Sakamoto

use crate::vector::Vector3;
use thiserror::Error;

/// Rendering errors
///
/// Every operation in the core is a deterministic pure computation, so
/// these are never transient: retrying with the same inputs fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Attempted to normalize a vector with zero (or non-finite) magnitude
    #[error("Invalid vector: cannot normalize {0}")]
    InvalidVector(Vector3),

    /// Image settings rejected before ray generation
    #[error("Invalid configuration: {0}")]
    Config(String),
}
