//! State boundary file access. The map itself is rendered by the front
//! end; the engine only surfaces the `state` keys of the GeoJSON features
//! so purchase data can be joined against map coverage.

use crate::error::EngineError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Returns the `state` property of every feature in the boundary file, or
/// `None` when the file is absent or unreadable (the map is then disabled,
/// not an error).
pub fn load_state_names(path: &Path) -> Option<Vec<String>> {
    if !path.exists() {
        warn!(path = %path.display(), "state boundary file missing, map disabled");
        return None;
    }
    match read_state_names(path) {
        Ok(names) => Some(names),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read state boundaries, map disabled");
            None
        }
    }
}

fn read_state_names(path: &Path) -> Result<Vec<String>, EngineError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let features = value
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| EngineError::GeoFormat("missing features array".to_string()))?;

    Ok(features
        .iter()
        .filter_map(|feature| {
            feature
                .get("properties")
                .and_then(|p| p.get("state"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_state_names() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"state": "Karnataka"}, "geometry": null},
                {"type": "Feature", "properties": {"state": "Kerala"}, "geometry": null},
                {"type": "Feature", "properties": {"name": "no state key"}, "geometry": null}
            ]
        }"#;
        let tmp = write_file(geojson);
        let names = load_state_names(tmp.path()).unwrap();
        assert_eq!(names, ["Karnataka", "Kerala"]);
    }

    #[test]
    fn test_load_state_names_missing_file() {
        assert!(load_state_names(Path::new("no_such_dir/geo.json")).is_none());
    }

    #[test]
    fn test_load_state_names_not_a_feature_collection() {
        let tmp = write_file(r#"{"type": "Point"}"#);
        assert!(load_state_names(tmp.path()).is_none());
    }

    #[test]
    fn test_load_state_names_invalid_json() {
        let tmp = write_file("{not json");
        assert!(load_state_names(tmp.path()).is_none());
    }
}
