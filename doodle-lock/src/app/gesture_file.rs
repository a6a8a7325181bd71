//! Gesture JSON files
//!
//! Input convenience for the command line: one gesture per file, in the
//! serde representation of [`Gesture`].

use crate::capture::types::Gesture;
use std::path::Path;

/// Load and validate a gesture from a JSON file
pub fn load_gesture(path: &Path) -> crate::Result<Gesture> {
    let content = std::fs::read_to_string(path)?;
    let gesture: Gesture = serde_json::from_str(&content)?;
    gesture.validate()?;
    Ok(gesture)
}

/// Load several gestures, preserving order
pub fn load_gestures<P: AsRef<Path>>(paths: &[P]) -> crate::Result<Vec<Gesture>> {
    paths.iter().map(|p| load_gesture(p.as_ref())).collect()
}

/// Write a gesture as pretty JSON
pub fn save_gesture(gesture: &Gesture, path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(gesture)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}
