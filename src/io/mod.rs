//! File I/O for ALICE-March
//!
//! Scene files are stored as pretty-printed JSON (`.scene.json` by
//! convention, any `.json` path is accepted). Rendered pixel grids are
//! written as PNG when the `image` feature is enabled.
//!
//! Author: Moroya Sakamoto

mod json;
#[cfg(feature = "image")]
mod png;

pub use json::{from_json_string, load_scene_json, save_scene_json, to_json_string};
#[cfg(feature = "image")]
pub use png::{render_to_png, save_png, to_rgb_image};

use crate::error::RenderError;
use crate::types::SceneFile;
use std::path::Path;
use thiserror::Error;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Rendering failed before anything could be written
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Image encoding error
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Save a scene file (format from extension)
///
/// # Arguments
/// * `file` - The scene file to save
/// * `path` - File path (`.json`)
pub fn save(file: &SceneFile, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    if is_json(path) {
        save_scene_json(file, path)
    } else {
        Err(IoError::InvalidFormat(
            "Unknown file extension. Use .json".to_string(),
        ))
    }
}

/// Load a scene file (format from extension)
pub fn load(path: impl AsRef<Path>) -> Result<SceneFile, IoError> {
    let path = path.as_ref();
    if is_json(path) {
        load_scene_json(path)
    } else {
        Err(IoError::InvalidFormat(
            "Unknown file extension. Use .json".to_string(),
        ))
    }
}

/// Get a short human-readable summary of a scene file
pub fn get_info(path: impl AsRef<Path>) -> Result<String, IoError> {
    let file = load(path)?;
    let s = &file.settings;
    Ok(format!(
        "Version: {}\nNode count: {}\nPrimitives: {}\nImage: {}x{}\nField of view: {:.4} rad\nRender distance: {}\nTolerance: {:e}\nSun: {}",
        file.version,
        file.node_count(),
        file.scene.primitive_count(),
        s.width,
        s.height,
        s.field_of_view,
        s.render_distance,
        s.tolerance,
        s.sun_position,
    ))
}
