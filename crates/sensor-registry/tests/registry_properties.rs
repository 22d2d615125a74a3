use sensor_registry::{
    self as reg, Category, ChartType, FormatKind, LocalTime, SensorRegistry, Snapshot, Source,
    TelemetryValue, Unverified,
};
use serde_json::json;

const UNREGISTERED: &[&str] = &["", "SPEED", "gps", "gps.altitude", "eng_rpm ", "weather"];

fn snapshot() -> Snapshot {
    Snapshot::from_json_value(json!({
        "gps": {"local_time": "2024-05-01T12:00:00Z", "satellites": 11, "speed": 63.5},
        "sensors": [
            ["speed", 42],
            ["gps.satellites", 99],
            ["doors_open", [1, 0, 0, 0]],
            ["driver_ids", ["DRV1", "DRV2"]]
        ]
    }))
    .unwrap()
}

/// A value of the shape each formatter expects.
fn representative(kind: FormatKind) -> TelemetryValue {
    match kind {
        FormatKind::Plain | FormatKind::Unit(_) | FormatKind::Tight(_) => 12.5.into(),
        FormatKind::Duration => 3725.into(),
        FormatKind::Ignition => "on".into(),
        FormatKind::YesNo => true.into(),
        FormatKind::Presence => 1.into(),
        FormatKind::Hex => 255.into(),
        FormatKind::FirstElement => vec![1, 0].into(),
        FormatKind::Raw => vec!["a", "b"].into(),
        FormatKind::DriverStates => "00000000000000000000000000000000".into(),
    }
}

#[test]
fn test_every_registered_key_is_supported_and_labelled() {
    let registry = SensorRegistry::global();
    assert_eq!(registry.len(), 153);
    for d in registry.iter() {
        assert!(reg::is_supported(d.key), "{}", d.key);
        assert!(reg::label(d.key).is_some(), "{}", d.key);
        assert!(!d.label.is_empty(), "{}", d.key);
    }
}

#[test]
fn test_every_key_formats_a_representative_value() {
    for d in SensorRegistry::global().iter() {
        let value = representative(d.format);
        let out = reg::format(d.key, &value).unwrap();
        assert!(!out.is_empty(), "{}", d.key);
    }
}

#[test]
fn test_formatters_never_panic_on_odd_shapes() {
    let odd = [
        TelemetryValue::Null,
        TelemetryValue::Bool(false),
        TelemetryValue::Float(f64::NAN),
        TelemetryValue::Float(-1.5),
        TelemetryValue::Int(i64::MIN),
        TelemetryValue::Text(String::new()),
        TelemetryValue::List(vec![]),
        TelemetryValue::List(vec![TelemetryValue::List(vec![1.into()])]),
    ];
    for d in SensorRegistry::global().iter() {
        for v in &odd {
            assert!(reg::format(d.key, v).is_some());
        }
    }
}

#[test]
fn test_unregistered_keys_yield_none() {
    let snap = snapshot();
    for key in UNREGISTERED {
        assert!(!reg::is_supported(key));
        assert_eq!(reg::lookup(&snap, key), None);
        assert_eq!(reg::format(key, &1.into()), None);
        assert_eq!(reg::label(key), None);
        assert_eq!(reg::chart_type(key), None);
        assert_eq!(reg::category(key), None);
    }
}

#[test]
fn test_lookup_scans_sensors() {
    let snap = snapshot();
    let r = reg::lookup(&snap, "speed").unwrap();
    assert_eq!(r.local_time, LocalTime::Text("2024-05-01T12:00:00Z".into()));
    assert_eq!(r.value, TelemetryValue::Int(42));

    // Registered but not in this snapshot
    assert!(reg::is_supported("fuel_lvl"));
    assert_eq!(reg::lookup(&snap, "fuel_lvl"), None);
}

#[test]
fn test_gps_lookups_bypass_sensor_list() {
    let snap = snapshot();
    let sats = reg::lookup(&snap, "gps.satellites").unwrap();
    assert_eq!(sats.value, TelemetryValue::Int(11));
    let speed = reg::lookup(&snap, "gps.speed").unwrap();
    assert_eq!(speed.value, TelemetryValue::Float(63.5));
    assert_eq!(reg::format("gps.speed", &speed.value).as_deref(), Some("63.5 km/h"));
}

#[test]
fn test_only_gps_keys_read_from_gps() {
    for d in SensorRegistry::global().iter() {
        match d.source {
            Source::Gps(_) => assert!(d.key.starts_with("gps."), "{}", d.key),
            Source::Sensors => assert!(!d.key.starts_with("gps."), "{}", d.key),
        }
    }
}

#[test]
fn test_documented_formatting_examples() {
    let f = |k: &str, v: TelemetryValue| reg::format(k, &v).unwrap();
    assert_eq!(f("eng_work_time", 3725.into()), "01:02:05");
    assert_eq!(f("ignition", "acc".into()), "ACC");
    assert_eq!(f("ignition", "unknown_code".into()), "unknown_code");
    assert_eq!(f("sd_present", 0.into()), "Not Present");
    assert_eq!(f("sd_present", 1.into()), "Present");
    assert_eq!(f("agri_mach_flags", 255.into()), "0xff");
    assert_eq!(f("agri_mach_flags", "N/A".into()), "N/A");
    assert_eq!(
        f("driver_states", "00000000000000000000000000000000".into()),
        "Unknown"
    );
    assert_eq!(f("pp_idling", true.into()), "Yes");
    assert_eq!(f("pp_idling", 0.into()), "No");
    assert_eq!(f("fuel_rate_gps", 8.2.into()), "8.2 ℓ/100km");
    assert_eq!(f("ble_humidity", 40.into()), "40%RH");
    assert_eq!(f("eng_temp", 90.into()), "90 ℃");
    assert_eq!(f("dallas_temp", vec![21.5, 22.0].into()), "21.5,22℃");
    assert_eq!(f("speed", (-0.0).into()), "0 km/h");
    assert_eq!(f("eng_work_time", 1e300.into()), "1e+300");
}

#[test]
fn test_array_sensors() {
    let snap = snapshot();
    let doors = reg::lookup(&snap, "doors_open").unwrap();
    assert_eq!(reg::format("doors_open", &doors.value).as_deref(), Some("1"));
    let ids = reg::lookup(&snap, "driver_ids").unwrap();
    assert_eq!(reg::format("driver_ids", &ids.value).as_deref(), Some("DRV1,DRV2"));
}

#[test]
fn test_metadata_is_fixed_per_key() {
    assert_eq!(reg::chart_type("eng_rpm"), Some(ChartType::Line));
    assert_eq!(reg::chart_type("ignition"), None);
    assert_eq!(reg::category("adblue_lvl"), Some(Category::Adblue));
    assert_eq!(reg::category("lls_temp"), Some(Category::LlsTemp));
    assert_eq!(reg::label("driver_ids"), Some("Driver Id's"));
}

#[test]
fn test_categories_cover_every_tag() {
    let cats = SensorRegistry::global().categories();
    assert_eq!(cats.len(), Category::ALL.len());
    assert_eq!(cats[0], Category::Gps);
    let ble_temp: Vec<&str> = SensorRegistry::global()
        .in_category(Category::BleTemperature)
        .map(|d| d.key)
        .collect();
    assert_eq!(
        ble_temp,
        vec!["ble_temp", "ble_temp_errors", "ble_humidity", "ble_humidity_errors"]
    );
}

#[test]
fn test_unverified_entries_are_annotated() {
    let registry = SensorRegistry::global();
    let get = |k: &str| registry.descriptor(k).map(|d| d.unverified).unwrap_or(&[]);
    assert_eq!(get("eng_total_time"), &[Unverified::Format]);
    assert_eq!(get("tot_mileage_cnt"), &[Unverified::Format]);
    assert_eq!(get("rec_in_flash"), &[Unverified::Label]);
    assert_eq!(get("charger_conn"), &[Unverified::Values]);
    assert_eq!(get("obd_accum_mil"), &[Unverified::Label]);
    assert_eq!(get("ble_fuel_level"), &[Unverified::Key]);
    assert!(get("speed").is_empty());

    // Fuel OBD sensors doubt both the label and the unit
    for key in ["obd_inst_fuel", "obd_avg_fuel"] {
        let doubts = get(key);
        assert!(doubts.contains(&Unverified::Label), "{key}");
        assert!(doubts.contains(&Unverified::Format), "{key}");
    }

    // Every OBD sensor keeps its provisional-label annotation
    for d in registry.iter().filter(|d| d.key.starts_with("obd_")) {
        assert!(d.unverified.contains(&Unverified::Label), "{}", d.key);
    }
    assert_eq!(registry.unverified().count(), 20);
}

#[test]
fn test_charted_sensors_have_line_hint() {
    for d in SensorRegistry::global().charted() {
        assert_eq!(d.chart_type, Some(ChartType::Line));
    }
    assert!(SensorRegistry::global().charted().any(|d| d.key == "gps.satellites"));
}
