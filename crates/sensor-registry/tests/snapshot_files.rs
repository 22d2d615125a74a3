use sensor_registry::{load_snapshot_file, load_snapshots_dir, render, LocalTime, TelemetryValue};
use std::fs;
use tempfile::TempDir;

const JSON_SNAPSHOT: &str = r#"{
  "gps": {"local_time": 1714564800, "satellites": 9, "speed": 0},
  "sensors": [["ignition", "off"], ["fuel_lvl", 54.2]]
}"#;

const YAML_SNAPSHOT: &str = r#"
gps:
  local_time: "2024-05-01T12:00:00Z"
  satellites: 4
sensors:
  - [ignition, acc]
  - [eng_work_time, 7200]
  - [agri_mach_flags, 16]
"#;

#[test]
fn test_loads_json_and_yaml_snapshots() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("a.json");
    let yaml_path = dir.path().join("b.yaml");
    fs::write(&json_path, JSON_SNAPSHOT).unwrap();
    fs::write(&yaml_path, YAML_SNAPSHOT).unwrap();

    let a = load_snapshot_file(&json_path).unwrap();
    assert_eq!(a.gps.local_time, LocalTime::Epoch(1714564800));
    assert_eq!(a.find("fuel_lvl"), Some(&TelemetryValue::Float(54.2)));

    let b = load_snapshot_file(&yaml_path).unwrap();
    let rows = render(&b);
    let formatted: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.key, r.formatted.as_str()))
        .collect();
    assert_eq!(
        formatted,
        vec![
            ("gps.satellites", "4"),
            ("ignition", "ACC"),
            ("eng_work_time", "02:00:00"),
            ("agri_mach_flags", "0x10"),
        ]
    );
}

#[test]
fn test_loads_directory_in_path_order_and_skips_other_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2.yml"), YAML_SNAPSHOT).unwrap();
    fs::write(dir.path().join("1.json"), JSON_SNAPSHOT).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a snapshot").unwrap();

    let snaps = load_snapshots_dir(dir.path()).unwrap();
    assert_eq!(snaps.len(), 2);
    assert_eq!(snaps[0].gps.local_time, LocalTime::Epoch(1714564800));
}

#[test]
fn test_missing_dir_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no_such_dir");
    let err = load_snapshots_dir(&missing).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("reading snapshot dir"), "{msg}");
    assert!(msg.contains("no_such_dir"), "{msg}");
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"sensors": []}"#).unwrap();
    let err = load_snapshot_file(&path).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("bad.json"), "{msg}");
    assert!(msg.contains("no gps block"), "{msg}");
}
