//! Scene file JSON format
//!
//! Author: Moroya Sakamoto

use crate::io::IoError;
use crate::types::SceneFile;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a scene file as pretty JSON
pub fn save_scene_json(file: &SceneFile, path: impl AsRef<Path>) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer_pretty(&mut writer, file)
        .map_err(|e| IoError::Serialization(e.to_string()))?;
    writer.flush()?;

    Ok(())
}

/// Load a scene file from JSON
pub fn load_scene_json(path: impl AsRef<Path>) -> Result<SceneFile, IoError> {
    let reader = BufReader::new(File::open(path)?);

    let file: SceneFile =
        serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))?;

    Ok(file)
}

/// Serialize a scene file to a JSON string
pub fn to_json_string(file: &SceneFile) -> Result<String, IoError> {
    serde_json::to_string_pretty(file).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Parse a scene file from a JSON string
pub fn from_json_string(json: &str) -> Result<SceneFile, IoError> {
    serde_json::from_str(json).map_err(|e| IoError::Serialization(e.to_string()))
}
