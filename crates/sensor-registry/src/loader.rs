use crate::error::{RegistryError, Result};
use crate::types::Snapshot;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

impl Snapshot {
    /// Parses a snapshot, checking the `gps` block and the `[name, value]` pairs first
    /// so malformed input is reported precisely rather than as a generic serde error.
    pub fn from_json_value(val: Value) -> Result<Snapshot> {
        let obj = val
            .as_object()
            .ok_or_else(|| RegistryError::Json("snapshot is not an object".into()))?;
        match obj.get("gps") {
            Some(Value::Object(_)) => {}
            _ => return Err(RegistryError::MissingGps),
        }
        let sensors = match obj.get("sensors") {
            Some(Value::Array(items)) => items,
            _ => return Err(RegistryError::MissingSensors),
        };
        for (index, item) in sensors.iter().enumerate() {
            let pair = item.as_array().ok_or(RegistryError::MalformedReading {
                index,
                reason: "expected a [name, value] array",
            })?;
            if pair.len() != 2 {
                return Err(RegistryError::MalformedReading {
                    index,
                    reason: "expected exactly two elements",
                });
            }
            if !pair[0].is_string() {
                return Err(RegistryError::MalformedReading {
                    index,
                    reason: "sensor name is not a string",
                });
            }
        }
        serde_json::from_value(val).map_err(|e| RegistryError::Json(e.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Snapshot> {
        let val: Value = serde_json::from_str(raw).map_err(|e| RegistryError::Json(e.to_string()))?;
        Self::from_json_value(val)
    }
}

/// Loads one snapshot from a `.json`, `.yml` or `.yaml` file.
pub fn load_snapshot_file(path: impl AsRef<Path>) -> anyhow::Result<Snapshot> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot: {}", path.display()))?;
    let val: Value = if is_yaml(path) {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing yaml: {}", path.display()))?;
        serde_json::to_value(yaml)
            .with_context(|| format!("converting yaml: {}", path.display()))?
    } else {
        serde_json::from_str(&raw).with_context(|| format!("parsing json: {}", path.display()))?
    };
    let snap = Snapshot::from_json_value(val)
        .with_context(|| format!("decoding snapshot: {}", path.display()))?;
    tracing::debug!(path = %path.display(), readings = snap.sensors.len(), "loaded snapshot");
    Ok(snap)
}

/// Loads every snapshot file in `dir`, sorted by path.
pub fn load_snapshots_dir(dir: impl AsRef<Path>) -> anyhow::Result<Vec<Snapshot>> {
    let dir = dir.as_ref();
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("reading snapshot dir: {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("reading snapshot dir: {}", dir.display()))?;
        let path = entry.path();
        if let Some(ext) = path.extension() {
            if ext == "json" || ext == "yml" || ext == "yaml" {
                entries.push(path);
            }
        }
    }
    entries.sort();
    let mut out = Vec::with_capacity(entries.len());
    for p in entries {
        out.push(load_snapshot_file(&p)?);
    }
    Ok(out)
}

/// JSON schema of the snapshot format, for producers validating their output.
#[cfg(feature = "schema")]
pub fn snapshot_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(Snapshot)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LocalTime, TelemetryValue};
    use serde_json::json;

    #[test]
    fn test_missing_gps() {
        let err = Snapshot::from_json_value(json!({"sensors": []})).unwrap_err();
        assert!(matches!(err, RegistryError::MissingGps));
    }

    #[test]
    fn test_missing_sensors() {
        let err = Snapshot::from_json_value(json!({"gps": {"local_time": 1}})).unwrap_err();
        assert!(matches!(err, RegistryError::MissingSensors));
    }

    #[test]
    fn test_malformed_pair() {
        let err = Snapshot::from_json_value(json!({
            "gps": {"local_time": 1},
            "sensors": [["speed", 1], ["fuel_lvl"]]
        }))
        .unwrap_err();
        assert!(matches!(err, RegistryError::MalformedReading { index: 1, .. }));

        let err = Snapshot::from_json_value(json!({
            "gps": {"local_time": 1},
            "sensors": [[7, 1]]
        }))
        .unwrap_err();
        assert!(matches!(err, RegistryError::MalformedReading { index: 0, .. }));
    }

    #[test]
    fn test_missing_local_time_is_json_error() {
        let err = Snapshot::from_json_value(json!({"gps": {}, "sensors": []})).unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }

    #[test]
    fn test_from_json_str() {
        let snap = Snapshot::from_json_str(
            r#"{"gps": {"local_time": "2024-01-01T00:00:00Z"}, "sensors": [["speed", 42]]}"#,
        )
        .unwrap();
        assert_eq!(snap.gps.local_time, LocalTime::Text("2024-01-01T00:00:00Z".into()));
        assert_eq!(snap.find("speed"), Some(&TelemetryValue::Int(42)));
    }
}
